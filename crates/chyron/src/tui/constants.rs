//! Shared constants for the TUI to keep layout and timing in sync.

/// Height in rows of the banner strip, borders included.
pub const BANNER_HEIGHT: u16 = 3;
/// Minimum height of the lineup panel.
pub const MAIN_MIN_HEIGHT: u16 = 5;
/// Height of the status footer (key hints plus message line).
pub const STATUS_FOOTER_HEIGHT: u16 = 4;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Columns reserved for the logo badge inside the banner.
pub const LOGO_BADGE_WIDTH: u16 = 18;
/// Highlight symbol shown beside the selected lineup entry.
pub const LINEUP_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Marker prefixed to marked lineup entries.
pub const MARK_SYMBOL: &str = "✔ ";
/// Graphemes of the headline shown per lineup row before truncation.
pub const LIST_HEADLINE_GRAPHEMES: usize = 72;
