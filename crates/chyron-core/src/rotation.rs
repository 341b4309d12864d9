use std::time::{Duration, Instant};

use tracing::trace;

use crate::item::TickerItem;
use crate::store::{ChangeKind, TickerChange};

/// Cadence of the rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTiming {
    /// How long each item stays fully visible.
    pub display: Duration,
    /// How long the fade between two items takes.
    pub transition: Duration,
}

impl Default for RotationTiming {
    fn default() -> Self {
        Self {
            display: Duration::from_secs(5),
            transition: Duration::from_secs(1),
        }
    }
}

/// Phase of the rotation cycle.
///
/// The phase deadlines are the two cancelable timers of the engine: the
/// `Visible` deadline is the cadence, the `Hiding` deadline the transition
/// one-shot. Re-synchronizing re-arms both; [`RotationEngine::disarm`]
/// cancels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to show; no deadlines armed.
    Idle,
    /// The item at `cursor` is on screen until the deadline elapses.
    Visible {
        /// Index of the item on screen.
        cursor: usize,
        /// When the fade-out starts.
        until: Instant,
    },
    /// The item at `cursor` is fading out; the cursor advances at the
    /// deadline.
    Hiding {
        /// Index of the item fading out.
        cursor: usize,
        /// When the next item takes over.
        until: Instant,
    },
}

/// What the render layer shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame<'a> {
    /// Item currently selected by the cursor, if any.
    pub item: Option<&'a TickerItem>,
    /// Whether the item is in its visible phase (false while fading).
    pub visible: bool,
}

/// Two-phase rotation engine: visible, fading, advance, repeat.
///
/// The engine is stepped by the host event loop: [`RotationEngine::tick`]
/// applies any elapsed deadline and [`RotationEngine::observe`]
/// re-synchronizes with the store. It keeps a private copy of the sequence
/// and derives its own cursor; it never mutates the store.
pub struct RotationEngine {
    timing: RotationTiming,
    sequence: Vec<TickerItem>,
    phase: Phase,
}

impl RotationEngine {
    /// Create an idle engine with the given cadence.
    #[must_use]
    pub const fn new(timing: RotationTiming) -> Self {
        Self {
            timing,
            sequence: Vec::new(),
            phase: Phase::Idle,
        }
    }

    /// Cadence the engine was built with.
    #[must_use]
    pub const fn timing(&self) -> RotationTiming {
        self.timing
    }

    /// Current phase, deadlines included.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Item under the cursor together with its visibility.
    #[must_use]
    pub fn frame(&self) -> DisplayFrame<'_> {
        match self.phase {
            Phase::Idle => DisplayFrame {
                item: None,
                visible: false,
            },
            Phase::Visible { cursor, .. } => DisplayFrame {
                item: self.sequence.get(cursor),
                visible: true,
            },
            Phase::Hiding { cursor, .. } => DisplayFrame {
                item: self.sequence.get(cursor),
                visible: false,
            },
        }
    }

    /// Apply a store notification.
    ///
    /// Structural changes restart the rotation from the head of the new
    /// sequence with deadlines armed from `now`; content changes swap the
    /// sequence in place without touching phase or deadlines; logo changes
    /// are not the engine's concern.
    pub fn observe(&mut self, change: &TickerChange, now: Instant) {
        match change.kind {
            ChangeKind::Structural => {
                self.sequence = change.snapshot.sequence.clone();
                self.restart(now);
            }
            ChangeKind::Content => {
                self.sequence = change.snapshot.sequence.clone();
                self.clamp_cursor();
            }
            ChangeKind::Logo => {}
        }
    }

    /// Step the state machine.
    ///
    /// Returns true when the phase changed and the banner needs a redraw.
    /// Deadlines chain from the previous deadline, not from `now`, so the
    /// cadence does not drift with the host tick rate.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible { cursor, until } if now >= until => {
                self.phase = Phase::Hiding {
                    cursor,
                    until: until + self.timing.transition,
                };
                trace!(cursor, "fade out");
                true
            }
            Phase::Hiding { cursor, until } if now >= until => {
                self.advance(cursor, until);
                true
            }
            Phase::Idle | Phase::Visible { .. } | Phase::Hiding { .. } => false,
        }
    }

    /// Cancel both deadlines and go idle; used on display teardown.
    pub fn disarm(&mut self) {
        self.phase = Phase::Idle;
        self.sequence.clear();
    }

    fn restart(&mut self, now: Instant) {
        self.phase = if self.sequence.is_empty() {
            Phase::Idle
        } else {
            Phase::Visible {
                cursor: 0,
                until: now + self.timing.display,
            }
        };
        trace!(len = self.sequence.len(), "rotation restarted");
    }

    /// The momentary advancing step: recompute the cursor after a fade.
    fn advance(&mut self, cursor: usize, deadline: Instant) {
        if self.sequence.is_empty() {
            // Shrunk to nothing while hidden; never advance into the void.
            self.phase = Phase::Idle;
            return;
        }
        // Wraps when the cursor reached (or, after shrinkage, passed) the
        // last index.
        let next = if cursor + 1 >= self.sequence.len() {
            0
        } else {
            cursor + 1
        };
        self.phase = Phase::Visible {
            cursor: next,
            until: deadline + self.timing.display,
        };
        trace!(cursor = next, "advance");
    }

    fn clamp_cursor(&mut self) {
        let len = self.sequence.len();
        if len == 0 {
            self.phase = Phase::Idle;
            return;
        }
        match &mut self.phase {
            Phase::Visible { cursor, .. } | Phase::Hiding { cursor, .. } if *cursor >= len => {
                *cursor = 0;
            }
            Phase::Idle | Phase::Visible { .. } | Phase::Hiding { .. } => {}
        }
    }
}
