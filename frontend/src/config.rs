use log::Level;

use crate::interaction::cord::{CordConfig, GesturePolicy};

pub const SITE_NAME: &str = "Leave Your Mark";
pub const HEADLINE: &str = "LEAVE YOUR MARK";
pub const TAGLINE: &str = "Transformamos ideias em experiências que marcam";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/leaveyourmark.pt/";
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Radius in px of the circle that reveals the bright headline layer.
pub const REVEAL_RADIUS_PX: f64 = 120.0;

/// Wave tick while the cord is hovered or dragged (~60fps).
pub const WAVE_TICK_MS: u32 = 16;

/// Nav switches to its solid style past this scroll offset.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 80.0;

pub fn cord_config() -> CordConfig {
    CordConfig::new(80.0, 70.0, GesturePolicy::Toggle)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
