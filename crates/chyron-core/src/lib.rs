//! Domain core for the chyron ticker: the ordered lineup store and the
//! rotation engine that decides what the banner shows.
//!
//! The [`store::TickerStore`] is the single source of truth for the lineup
//! and the logo reference; it publishes a [`store::TickerChange`] to
//! registered observers after every mutation. The
//! [`rotation::RotationEngine`] consumes those notifications and a periodic
//! tick to drive the visible/fading display cycle. Both are strictly
//! single-threaded; the host event loop supplies the clock.

/// Item identifiers.
pub mod id;
/// The item model and the opaque logo handle.
pub mod item;
/// The two-phase rotation state machine.
pub mod rotation;
/// The lineup store and its change notifications.
pub mod store;

pub use id::ItemId;
pub use item::{LogoHandle, NewsItem, ScoreItem, TickerItem};
pub use rotation::{DisplayFrame, Phase, RotationEngine, RotationTiming};
pub use store::{ChangeKind, ObserverId, TickerChange, TickerSnapshot, TickerStore};
