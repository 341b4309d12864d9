//! The composition root wiring the lineup store to the rotation engine.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Instant;

use chyron_core::{
    ItemId, LogoHandle, ObserverId, Phase, RotationEngine, RotationTiming, TickerItem,
    TickerSnapshot, TickerStore,
};

/// Owned copy of the engine's display frame, for render layers that cannot
/// hold a borrow across the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerFrame {
    /// Item under the rotation cursor, if any.
    pub item: Option<TickerItem>,
    /// Whether the item is in its visible phase (false while fading).
    pub visible: bool,
}

/// Owns the ticker store and rotation engine and keeps them in sync.
///
/// One session is constructed at the top level and handed by reference to
/// the editor and render layers; there is no process-wide state. All methods
/// take the caller's `Instant` so the store notification and the engine
/// deadlines observe a single cooperative clock: a mutation is fully
/// applied, and the engine re-synchronized, before any later `tick` fires.
pub struct TickerSession {
    store: Rc<RefCell<TickerStore>>,
    engine: Rc<RefCell<RotationEngine>>,
    clock: Rc<Cell<Instant>>,
    observer: ObserverId,
}

impl TickerSession {
    /// Create an empty session with the given cadence.
    #[must_use]
    pub fn new(timing: RotationTiming, now: Instant) -> Self {
        let store = Rc::new(RefCell::new(TickerStore::new()));
        let engine = Rc::new(RefCell::new(RotationEngine::new(timing)));
        let clock = Rc::new(Cell::new(now));
        let observer = {
            let engine = Rc::clone(&engine);
            let clock = Rc::clone(&clock);
            store.borrow_mut().subscribe(move |change| {
                engine.borrow_mut().observe(change, clock.get());
            })
        };
        Self {
            store,
            engine,
            clock,
            observer,
        }
    }

    /// Append an item to the lineup.
    pub fn add(&self, item: TickerItem, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().add(item);
    }

    /// Append several items in order.
    pub fn seed(&self, items: Vec<TickerItem>, now: Instant) {
        for item in items {
            self.add(item, now);
        }
    }

    /// Remove the item with the given id. Unknown ids are ignored.
    pub fn remove(&self, id: ItemId, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().remove(id);
    }

    /// Remove the items at `positions` (pre-removal indices) in one batch.
    pub fn remove_at(&self, positions: &BTreeSet<usize>, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().remove_at(positions);
    }

    /// Move the item at `from` to index `to` (splice semantics).
    pub fn move_item(&self, from: usize, to: usize, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().move_item(from, to);
    }

    /// Replace the content of the item sharing `item`'s id; ids no longer
    /// present are silently dropped.
    pub fn update(&self, item: TickerItem, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().update(item);
    }

    /// Replace the logo reference wholesale.
    pub fn set_logo(&self, logo: Option<LogoHandle>, now: Instant) {
        self.clock.set(now);
        self.store.borrow_mut().set_logo(logo);
    }

    /// Step the rotation; returns true when the banner phase changed.
    pub fn tick(&self, now: Instant) -> bool {
        self.clock.set(now);
        self.engine.borrow_mut().tick(now)
    }

    /// Immutable copy of the store state.
    #[must_use]
    pub fn snapshot(&self) -> TickerSnapshot {
        self.store.borrow().snapshot()
    }

    /// Number of items in the lineup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Whether the lineup is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Position of the item with the given id, if present.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.store.borrow().position(id)
    }

    /// Current banner frame: the cursor item and its visibility.
    #[must_use]
    pub fn frame(&self) -> BannerFrame {
        let engine = self.engine.borrow();
        let frame = engine.frame();
        BannerFrame {
            item: frame.item.cloned(),
            visible: frame.visible,
        }
    }

    /// Current rotation phase, deadlines included.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.borrow().phase()
    }
}

impl Drop for TickerSession {
    fn drop(&mut self) {
        // Detach from the store and cancel outstanding deadlines so a late
        // notification cannot reach a torn-down display.
        self.store.borrow_mut().unsubscribe(self.observer);
        self.engine.borrow_mut().disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timing() -> RotationTiming {
        RotationTiming {
            display: Duration::from_secs(5),
            transition: Duration::from_secs(1),
        }
    }

    #[test]
    fn empty_session_is_idle() {
        let now = Instant::now();
        let session = TickerSession::new(timing(), now);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.frame().item, None);
        assert!(!session.frame().visible);
    }

    #[test]
    fn first_add_arms_the_rotation() {
        let now = Instant::now();
        let session = TickerSession::new(timing(), now);
        session.add(TickerItem::news("first"), now);
        assert!(matches!(session.phase(), Phase::Visible { cursor: 0, .. }));
        assert!(session.frame().visible);
    }

    #[test]
    fn mutation_reaches_the_engine_before_the_next_tick() {
        let now = Instant::now();
        let session = TickerSession::new(timing(), now);
        session.add(TickerItem::news("a"), now);

        // Remove everything just before the visible deadline; the tick at
        // the deadline must find an idle engine, not a dangling cursor.
        let id = session.snapshot().sequence[0].id();
        session.remove(id, now + Duration::from_millis(4999));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.tick(now + Duration::from_secs(5)));
    }

    #[test]
    fn frame_clones_do_not_hold_borrows() {
        let now = Instant::now();
        let session = TickerSession::new(timing(), now);
        session.add(TickerItem::news("a"), now);
        let frame = session.frame();
        // Mutating while holding an owned frame must not panic.
        session.add(TickerItem::news("b"), now);
        assert!(frame.item.is_some());
    }
}
