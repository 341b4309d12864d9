use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use chyron_core::{ItemId, NewsItem, ScoreItem};

pub(super) fn news_template(existing: Option<&NewsItem>) -> String {
    let verb = if existing.is_some() { "Edit" } else { "Create" };
    let text = existing.map_or("", |news| news.text.as_str());
    let lines = [
        format!("# {verb} a news entry. Lines starting with '#' are ignored."),
        "# Save with an empty text to cancel.".to_string(),
        format!("text: {text}"),
        String::new(),
    ];
    lines.join("\n")
}

pub(super) fn score_template(existing: Option<&ScoreItem>) -> String {
    let verb = if existing.is_some() { "Edit" } else { "Create" };
    let start_time = existing.map_or_else(String::new, |score| format_timestamp(score.start_time));
    let lines = [
        format!("# {verb} a score entry. Lines starting with '#' are ignored."),
        "# league, team_a and team_b are required; save every field empty to cancel.".to_string(),
        "# start_time uses RFC 3339 (example: 2024-09-30T19:00:00Z); empty means now.".to_string(),
        format!("league: {}", existing.map_or("", |score| score.league.as_str())),
        format!("team_a: {}", existing.map_or("", |score| score.team_a.as_str())),
        format!("team_b: {}", existing.map_or("", |score| score.team_b.as_str())),
        format!("start_time: {start_time}"),
        format!(
            "additional_info: {}",
            existing.map_or("", |score| score.additional_info.as_str())
        ),
        String::new(),
    ];
    lines.join("\n")
}

/// Parse the news editor output. `Ok(None)` means the edit was cancelled;
/// `existing` supplies the id to preserve.
pub(super) fn parse_news_output(
    raw: &str,
    existing: Option<&NewsItem>,
) -> Result<Option<NewsItem>, String> {
    let mut text: Option<&str> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            return Err(format!("malformed field: {trimmed}"));
        };
        match key.trim() {
            "text" => text = Some(value.trim()),
            unknown => return Err(format!("unknown field: {unknown}")),
        }
    }

    let text = text.unwrap_or("").trim();
    if text.is_empty() {
        return Ok(None);
    }

    let id = existing.map_or_else(ItemId::new, |news| news.id);
    Ok(Some(NewsItem {
        id,
        text: text.to_owned(),
    }))
}

/// Parse the score editor output. `Ok(None)` means the edit was cancelled;
/// `existing` supplies the id (and fallback start time) to preserve.
pub(super) fn parse_score_output(
    raw: &str,
    existing: Option<&ScoreItem>,
) -> Result<Option<ScoreItem>, String> {
    let mut league: Option<&str> = None;
    let mut team_a: Option<&str> = None;
    let mut team_b: Option<&str> = None;
    let mut start_time: Option<&str> = None;
    let mut additional_info: Option<&str> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            return Err(format!("malformed field: {trimmed}"));
        };
        let value = value.trim();
        match key.trim() {
            "league" => league = Some(value),
            "team_a" => team_a = Some(value),
            "team_b" => team_b = Some(value),
            "start_time" => start_time = Some(value),
            "additional_info" => additional_info = Some(value),
            unknown => return Err(format!("unknown field: {unknown}")),
        }
    }

    let league = league.unwrap_or("").trim();
    let team_a = team_a.unwrap_or("").trim();
    let team_b = team_b.unwrap_or("").trim();
    let start_time = start_time.unwrap_or("").trim();
    let additional_info = additional_info.unwrap_or("").trim();

    let is_all_empty = league.is_empty()
        && team_a.is_empty()
        && team_b.is_empty()
        && start_time.is_empty()
        && additional_info.is_empty();
    if is_all_empty {
        return Ok(None);
    }

    if league.is_empty() || team_a.is_empty() || team_b.is_empty() {
        return Err("league, team_a and team_b are required".into());
    }

    let start_time = if start_time.is_empty() {
        existing.map_or_else(OffsetDateTime::now_utc, |score| score.start_time)
    } else {
        OffsetDateTime::parse(start_time, &Rfc3339)
            .map_err(|err| format!("invalid start_time ({start_time}): {err}"))?
    };

    let id = existing.map_or_else(ItemId::new, |score| score.id);
    Ok(Some(ScoreItem {
        id,
        league: league.to_owned(),
        team_a: team_a.to_owned(),
        team_b: team_b.to_owned(),
        start_time,
        additional_info: additional_info.to_owned(),
    }))
}

pub(super) fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}
