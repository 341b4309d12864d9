//! Lineup seeding: TOML lineup files and the built-in demo lineup.
//!
//! A lineup file is inbound-only: entries carry no ids (ids are assigned
//! when they become items) and authored content is never written back.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use chyron_core::{ItemId, ScoreItem, TickerItem};

/// Error raised while reading a lineup file.
#[derive(Debug, Error)]
pub enum LineupError {
    /// The file could not be read.
    #[error("failed to read lineup {path}: {source}")]
    Io {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid lineup TOML.
    #[error("failed to parse lineup {path}: {source}")]
    Parse {
        /// Path as given by the caller.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// An entry carried a start time that is not RFC 3339.
    #[error("invalid start_time {value:?}: {source}")]
    Timestamp {
        /// The offending value.
        value: String,
        /// Underlying parse error.
        #[source]
        source: time::error::Parse,
    },
}

/// A lineup file: an ordered list of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupFile {
    /// Entries in display order.
    #[serde(default, rename = "item")]
    pub items: Vec<LineupEntry>,
}

/// One lineup entry, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineupEntry {
    /// A score entry.
    Score {
        /// League or competition name.
        league: String,
        /// First team name.
        team_a: String,
        /// Second team name.
        team_b: String,
        /// RFC 3339 start time; "now" when omitted.
        #[serde(default)]
        start_time: Option<String>,
        /// Free-form detail line.
        #[serde(default)]
        additional_info: String,
    },
    /// A news entry.
    News {
        /// Headline text.
        text: String,
    },
}

impl LineupFile {
    /// Read and parse a lineup file.
    ///
    /// # Errors
    /// Returns [`LineupError::Io`] or [`LineupError::Parse`].
    pub fn load(path: &Path) -> Result<Self, LineupError> {
        let contents = fs::read_to_string(path).map_err(|source| LineupError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| LineupError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Convert all entries into ticker items with fresh ids, preserving the
    /// file order.
    ///
    /// # Errors
    /// Returns [`LineupError::Timestamp`] when an entry's start time cannot
    /// be parsed.
    pub fn into_items(self) -> Result<Vec<TickerItem>, LineupError> {
        self.items.into_iter().map(LineupEntry::into_item).collect()
    }
}

impl LineupEntry {
    fn into_item(self) -> Result<TickerItem, LineupError> {
        match self {
            Self::Score {
                league,
                team_a,
                team_b,
                start_time,
                additional_info,
            } => {
                let start_time = match start_time {
                    Some(raw) => OffsetDateTime::parse(&raw, &Rfc3339)
                        .map_err(|source| LineupError::Timestamp { value: raw, source })?,
                    None => OffsetDateTime::now_utc(),
                };
                Ok(TickerItem::Score(ScoreItem {
                    id: ItemId::new(),
                    league,
                    team_a,
                    team_b,
                    start_time,
                    additional_info,
                }))
            }
            Self::News { text } => Ok(TickerItem::news(text)),
        }
    }
}

/// Built-in demo lineup: two scores and two headlines.
#[must_use]
pub fn sample_items() -> Vec<TickerItem> {
    let now = OffsetDateTime::now_utc();
    vec![
        TickerItem::score("NBA", "Lakers", "Warriors", now, "Final score: 102-99"),
        TickerItem::score(
            "NFL",
            "Patriots",
            "Dolphins",
            now + time::Duration::days(1),
            "Kickoff at 7 PM",
        ),
        TickerItem::news("Breaking news: major trade announced"),
        TickerItem::news("Update: weather forecast changes for the weekend"),
    ]
}

/// Lineup file template printed by `chyron sample-lineup`.
#[must_use]
pub const fn sample_lineup_toml() -> &'static str {
    r#"# chyron lineup file: entries play in file order.

[[item]]
kind = "score"
league = "NBA"
team_a = "Lakers"
team_b = "Warriors"
start_time = "2024-09-30T19:00:00Z" # RFC 3339; omit for "now"
additional_info = "Final score: 102-99"

[[item]]
kind = "news"
text = "Breaking news: major trade announced"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_lineup(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("must create temp file");
        file.write_all(contents.as_bytes()).expect("must write lineup");
        file
    }

    #[test]
    fn sample_template_parses_into_items() {
        let file: LineupFile = toml::from_str(sample_lineup_toml()).expect("template must parse");
        let items = file.into_items().expect("template must convert");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind_label(), "score");
        assert_eq!(items[1].kind_label(), "news");
    }

    #[test]
    fn file_order_becomes_display_order() {
        let file = write_lineup(
            r#"
[[item]]
kind = "news"
text = "first"

[[item]]
kind = "news"
text = "second"
"#,
        );
        let items = LineupFile::load(file.path())
            .expect("must load")
            .into_items()
            .expect("must convert");
        let texts: Vec<_> = items
            .iter()
            .map(|item| match item {
                TickerItem::News(news) => news.text.as_str(),
                TickerItem::Score(_) => "score",
            })
            .collect();
        assert_eq!(texts, ["first", "second"]);
        // Fresh ids per entry.
        assert_ne!(items[0].id(), items[1].id());
    }

    #[test]
    fn score_entry_parses_start_time() {
        let file = write_lineup(
            r#"
[[item]]
kind = "score"
league = "NHL"
team_a = "Bruins"
team_b = "Rangers"
start_time = "2024-12-01T18:30:00Z"
"#,
        );
        let items = LineupFile::load(file.path())
            .expect("must load")
            .into_items()
            .expect("must convert");
        let TickerItem::Score(score) = &items[0] else {
            panic!("expected score entry");
        };
        assert_eq!(score.start_time.hour(), 18);
        assert!(score.additional_info.is_empty());
    }

    #[test]
    fn invalid_start_time_is_reported() {
        let file = write_lineup(
            r#"
[[item]]
kind = "score"
league = "NHL"
team_a = "A"
team_b = "B"
start_time = "next tuesday"
"#,
        );
        let result = LineupFile::load(file.path()).expect("must load").into_items();
        assert!(matches!(result, Err(LineupError::Timestamp { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LineupFile::load(Path::new("/nonexistent/lineup.toml"));
        assert!(matches!(result, Err(LineupError::Io { .. })));
    }

    #[test]
    fn demo_lineup_matches_the_broadcast_preview() {
        let items = sample_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].kind_label(), "score");
        assert_eq!(items[3].kind_label(), "news");
    }
}
