//! Application layer for chyron.
//!
//! This crate provides configuration, lineup seeding, and the session that
//! wires the lineup store to the rotation engine for the terminal UI.

pub mod config;
pub mod lineup;
pub mod session;

// Re-exports for convenience
pub use config::{ChyronConfig, RotationConfig, UiConfig};
pub use lineup::{LineupEntry, LineupError, LineupFile, sample_items, sample_lineup_toml};
pub use session::{BannerFrame, TickerSession};
