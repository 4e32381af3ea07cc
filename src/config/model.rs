use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Point};
use crate::widget::TabStripSettings;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub widgets: WidgetConfig,
    /// Named text colors handed to the font engine.
    pub colors: HashMap<String, Color>,
    /// Base directory for relative image paths.
    pub assets_dir: PathBuf,
    /// Initial tab titles, in display order.
    pub tabs: Vec<String>,
    /// Top-left corner of the tab strip.
    pub origin: Point,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            font: FontConfig::default(),
            widgets: WidgetConfig::default(),
            colors: HashMap::from([
                ("widget_normal".to_string(), Color::WIDGET_NORMAL),
                ("widget_disabled".to_string(), Color::WIDGET_DISABLED),
            ]),
            assets_dir: PathBuf::from("assets"),
            tabs: ["Character", "Inventory", "Powers", "Log"]
                .map(String::from)
                .to_vec(),
            origin: Point::new(16, 16),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "tabstrip".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType/OpenType file; without one, labels are not drawn.
    pub path: Option<PathBuf>,
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 14.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub tab_padding: Point,
    pub selection_rect_color: Color,
    pub tab_active_image: PathBuf,
    pub tab_inactive_image: PathBuf,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let defaults = TabStripSettings::default();
        Self {
            tab_padding: defaults.tab_padding,
            selection_rect_color: defaults.selection_rect_color,
            tab_active_image: defaults.active_image,
            tab_inactive_image: defaults.inactive_image,
        }
    }
}

impl WidgetConfig {
    pub fn tab_strip_settings(&self) -> TabStripSettings {
        TabStripSettings {
            tab_padding: self.tab_padding,
            selection_rect_color: self.selection_rect_color,
            active_image: self.tab_active_image.clone(),
            inactive_image: self.tab_inactive_image.clone(),
        }
    }
}
