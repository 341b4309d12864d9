use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identifier of a ticker item (UUID v4).
///
/// Assigned once when the item is created and never changed afterwards;
/// content updates replace every field except this one.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ItemId(pub Uuid);

impl ItemId {
    #[must_use]
    /// Generate a fresh item identifier.
    pub fn new() -> Self {
        // Random v4: display order lives in the sequence, not in the id.
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_uses_uuid_v4() {
        let id = ItemId::new();
        assert_eq!(id.0.get_version_num(), 4);
    }

    #[test]
    fn item_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn item_id_roundtrip() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().expect("must parse item id");
        assert_eq!(parsed, id);
    }
}
