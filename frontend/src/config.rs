pub const BRAND_NAME: &str = "AHMED VPN";

/// Share of a section that must be inside the viewport before it becomes the active nav item.
pub const SCROLL_SPY_THRESHOLD: f64 = 0.3;

/// How long the "Copied!" confirmation stays up after a successful copy.
pub const COPY_CONFIRMATION_MS: u32 = 2_000;

pub const DEMO_NOTICE: &str = "This is a demo version. Actual functionality is not available.";

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
