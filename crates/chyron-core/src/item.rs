use crate::id::ItemId;
use time::OffsetDateTime;

/// A scheduled or finished game shown as a score entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreItem {
    /// Stable identity of the entry.
    pub id: ItemId,
    /// League or competition name.
    pub league: String,
    /// First team name.
    pub team_a: String,
    /// Second team name.
    pub team_b: String,
    /// Scheduled start in UTC.
    pub start_time: OffsetDateTime,
    /// Free-form detail line (final score, kickoff note, ...).
    pub additional_info: String,
}

/// A free-text headline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Stable identity of the entry.
    pub id: ItemId,
    /// Headline text.
    pub text: String,
}

/// One entry of the ticker lineup.
///
/// The derived `PartialEq` compares full content and exists for tests and
/// change detection; list positioning always goes through [`TickerItem::id`]
/// so two entries with identical content stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerItem {
    /// Sports score entry.
    Score(ScoreItem),
    /// News headline entry.
    News(NewsItem),
}

impl TickerItem {
    /// Identity of the entry, stable across content updates.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        match self {
            Self::Score(score) => score.id,
            Self::News(news) => news.id,
        }
    }

    /// Construct a news entry with a fresh id.
    #[must_use]
    pub fn news(text: impl Into<String>) -> Self {
        Self::News(NewsItem {
            id: ItemId::new(),
            text: text.into(),
        })
    }

    /// Construct a score entry with a fresh id.
    #[must_use]
    pub fn score(
        league: impl Into<String>,
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        start_time: OffsetDateTime,
        additional_info: impl Into<String>,
    ) -> Self {
        Self::Score(ScoreItem {
            id: ItemId::new(),
            league: league.into(),
            team_a: team_a.into(),
            team_b: team_b.into(),
            start_time,
            additional_info: additional_info.into(),
        })
    }

    /// Short variant label for list rendering and traces.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Score(_) => "score",
            Self::News(_) => "news",
        }
    }
}

/// Opaque reference to the logo asset shown beside the banner.
///
/// The core never interprets the value; the render layer decides what it
/// points at (a file path, an asset key, ...). Replaced wholesale, no
/// history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoHandle(String);

impl LogoHandle {
    /// Wrap an opaque handle value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw handle value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
