use std::collections::BTreeSet;

use tracing::debug;

use crate::id::ItemId;
use crate::item::{LogoHandle, TickerItem};

/// Immutable copy of the store state delivered to observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerSnapshot {
    /// Items in display order.
    pub sequence: Vec<TickerItem>,
    /// Current logo reference, if any.
    pub logo: Option<LogoHandle>,
}

/// Classification of a change notification.
///
/// The rotation engine restarts only on [`ChangeKind::Structural`]; content
/// and logo changes leave the current cycle untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The set or order of items changed (add/remove/move).
    Structural,
    /// An existing item's content changed in place.
    Content,
    /// The logo reference was replaced.
    Logo,
}

/// Change notification passed to observers after a mutation is applied.
#[derive(Debug, Clone)]
pub struct TickerChange {
    /// What category of mutation occurred.
    pub kind: ChangeKind,
    /// Full state after the mutation.
    pub snapshot: TickerSnapshot,
}

/// Handle identifying a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ObserverFn = Box<dyn FnMut(&TickerChange)>;

/// Ordered item collection with synchronous change notifications.
///
/// The store is the single source of truth for the lineup and the logo.
/// Observers run in registration order after every mutation, each receiving
/// a snapshot of the fully-applied state; none ever sees the sequence
/// mid-splice. Observers must not call back into the store synchronously.
#[derive(Default)]
pub struct TickerStore {
    items: Vec<TickerItem>,
    logo: Option<LogoHandle>,
    observers: Vec<(ObserverId, ObserverFn)>,
    next_observer: u64,
}

impl TickerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in the lineup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the lineup is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[TickerItem] {
        &self.items
    }

    /// Current logo reference.
    #[must_use]
    pub const fn logo(&self) -> Option<&LogoHandle> {
        self.logo.as_ref()
    }

    /// Immutable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> TickerSnapshot {
        TickerSnapshot {
            sequence: self.items.clone(),
            logo: self.logo.clone(),
        }
    }

    /// Position of the item with the given id, if present.
    ///
    /// Identity lookup only: two items with equal content are still distinct
    /// entries.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Append an item to the end of the lineup.
    pub fn add(&mut self, item: TickerItem) {
        debug!(id = %item.id(), kind = item.kind_label(), "add item");
        self.items.push(item);
        self.notify(ChangeKind::Structural);
    }

    /// Remove the item with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) {
        let Some(index) = self.position(id) else {
            return;
        };
        self.items.remove(index);
        debug!(%id, index, "remove item");
        self.notify(ChangeKind::Structural);
    }

    /// Remove the items at `positions`, all interpreted against the lineup
    /// as it was before any of the removals. Out-of-range positions are
    /// ignored; one notification covers the whole batch.
    pub fn remove_at(&mut self, positions: &BTreeSet<usize>) {
        let before = self.items.len();
        let mut index = 0;
        self.items.retain(|_| {
            let keep = !positions.contains(&index);
            index += 1;
            keep
        });
        if self.items.len() == before {
            return;
        }
        debug!(removed = before - self.items.len(), "remove items at positions");
        self.notify(ChangeKind::Structural);
    }

    /// Move the item at `from` so it ends up at index `to`.
    ///
    /// `to` addresses the lineup after the source is taken out (splice
    /// semantics) and is clamped to the end. Out-of-range `from` and moves
    /// that change nothing are ignored.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.items.len() {
            return;
        }
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        if to == from {
            // Same effective position: restore without notifying.
            self.items.insert(from, item);
            return;
        }
        debug!(id = %item.id(), from, to, "move item");
        self.items.insert(to, item);
        self.notify(ChangeKind::Structural);
    }

    /// Replace the content of the item sharing `item`'s id.
    ///
    /// Ids no longer present are silently dropped: an optimistic editor may
    /// race a concurrent delete, and resurrecting the entry would be worse
    /// than losing the edit.
    pub fn update(&mut self, item: TickerItem) {
        let Some(index) = self.position(item.id()) else {
            return;
        };
        debug!(id = %item.id(), index, "update item");
        self.items[index] = item;
        self.notify(ChangeKind::Content);
    }

    /// Replace the logo reference wholesale.
    pub fn set_logo(&mut self, logo: Option<LogoHandle>) {
        self.logo = logo;
        debug!(set = self.logo.is_some(), "set logo");
        self.notify(ChangeKind::Logo);
    }

    /// Register an observer invoked synchronously after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&TickerChange) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer, _)| *observer != id);
    }

    fn notify(&mut self, kind: ChangeKind) {
        let change = TickerChange {
            kind,
            snapshot: TickerSnapshot {
                sequence: self.items.clone(),
                logo: self.logo.clone(),
            },
        };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}
