//! A tab strip widget for 2D game menus.
//!
//! The widget ([`widget::TabStrip`]) lays out a row of tab headers,
//! stretches a three-part background image across each one, and switches
//! the active tab on pointer or keyboard input. Drawing and text
//! measurement go through the [`render::RenderDevice`] and
//! [`render::FontEngine`] traits; [`render::SoftwareDevice`] implements
//! the former for a CPU pixel canvas.

pub mod config;
pub mod core;
pub mod render;
pub mod widget;
