mod fonts;
mod input;
mod lifecycle;

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::Context as _;
use softbuffer::{Context, Surface};
use winit::event_loop::{ActiveEventLoop, EventLoop, OwnedDisplayHandle};
use winit::window::Window;

use tabstrip::config::AppConfig;
use tabstrip::core::{Color, InputState, Point};
use tabstrip::render::{FontEngine, FontdueEngine, Justify, Label, SoftwareDevice, VAlign};
use tabstrip::widget::{TabStrip, Widget};

/// Gap between the tab strip and the panel caption below it.
const PANEL_MARGIN: i32 = 16;

/// The demo window: a tab strip over a software canvas.
struct DemoWindow {
    window: Arc<Window>,
    surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    device: SoftwareDevice,
    font: Arc<FontdueEngine>,
    strip: TabStrip,
    input: InputState,
    base_title: String,
}

impl DemoWindow {
    fn new(
        event_loop: &ActiveEventLoop,
        context: &Context<OwnedDisplayHandle>,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width as f64,
                config.window.height as f64,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let surface = Surface::new(context, window.clone())
            .map_err(|e| anyhow::anyhow!("failed to create softbuffer surface: {e}"))?;

        let font_path = fonts::resolve_font(config.font.path.as_deref())?;
        let font = Arc::new(
            FontdueEngine::load(&font_path, config.font.size)?.with_colors(config.colors.clone()),
        );

        let size = window.inner_size();
        let mut device = SoftwareDevice::new(size.width as usize, size.height as usize)
            .with_font(font.clone())
            .with_asset_root(&config.assets_dir);

        let mut strip = TabStrip::new(
            &mut device,
            font.clone(),
            config.widgets.tab_strip_settings(),
        );
        for (i, title) in config.tabs.iter().enumerate() {
            strip.set_tab_title(i, title.as_str());
        }
        strip.set_origin(config.origin.x, config.origin.y);
        strip.set_focus(true);
        tracing::info!(tabs = strip.tab_count(), "tab strip ready");

        let demo = DemoWindow {
            window,
            surface,
            device,
            font,
            strip,
            input: InputState::new(),
            base_title: config.window.title.clone(),
        };
        demo.sync_title();
        Ok(demo)
    }

    /// Mirrors the active tab's name into the window title.
    fn sync_title(&self) {
        let title = match self.strip.tab_title(self.strip.active_tab()) {
            Some(name) if !name.is_empty() => format!("{} - {name}", self.base_title),
            _ => self.base_title.clone(),
        };
        self.window.set_title(&title);
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.device.resize(size.width as usize, size.height as usize);
        self.device.clear(Color::MENU_BG);
        self.strip.render(&mut self.device);
        self.render_panel();

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("surface resize failed: {e}"))?;
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("surface buffer unavailable: {e}"))?;
        buffer.copy_from_slice(self.device.pixels());
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("present failed: {e}"))
    }

    /// Stand-in content for the active tab.
    fn render_panel(&mut self) {
        let header = self.strip.header_area();
        let name = self
            .strip
            .tab_title(self.strip.active_tab())
            .unwrap_or_default();
        let caption = Label::new(
            Point::new(header.x, header.bottom() + PANEL_MARGIN),
            Justify::Left,
            VAlign::Top,
            format!("{name} panel"),
            self.font.color("widget_normal"),
        );
        caption.render(&mut self.device, self.font.as_ref());
    }
}

/// Top-level event loop state.
struct App {
    config: AppConfig,
    context: Option<Context<OwnedDisplayHandle>>,
    window: Option<DemoWindow>,
    /// First fatal error raised inside the event loop.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        App {
            config,
            context: None,
            window: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("event loop failed")?;
    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
