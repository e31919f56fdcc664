//! Application constants
//!
//! Centralized location for fixed demo content and configuration defaults.

/// Number of generated greetings on the Sample List screen
pub const GREETING_COUNT: usize = 101;

/// Prefix of each generated greeting, followed by its index
pub const GREETING_PREFIX: &str = "Hello Android #";

/// Title shown above the greeting list
pub const SAMPLE_LIST_TITLE: &str = "Sample List";

/// Number of rows on the Simple List screen
pub const IMAGE_LIST_SIZE: usize = 100;

/// The counter button turns active once the count goes above this value
pub const COUNTER_ACTIVE_THRESHOLD: u32 = 5;

/// Remote avatar image shown on every Simple List row
pub const ANDROID_ROBOT_URL: &str = "https://developer.android.com/images/brand/Android_Robot.png";

/// Target display size for avatars, in density-independent units
pub const DEFAULT_AVATAR_SIZE: u16 = 50;

/// Items materialized beyond each edge of the viewport
pub const LIST_OVERSCAN: usize = 2;

/// Frame rate of the animation ticker
pub const DEFAULT_FPS: u16 = 60;

/// Duration of the label background fade
pub const DEFAULT_COLOR_FADE_MS: u64 = 300;

/// Duration of an animated scroll
pub const DEFAULT_SCROLL_MS: u64 = 450;

/// Name of the config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".greetings-tui";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "greetings-tui.log";

/// Application name
pub const APP_NAME: &str = "Greetings TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
