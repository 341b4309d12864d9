use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use chyron_app::BannerFrame;
use chyron_core::{LogoHandle, ScoreItem, TickerItem};

use super::super::constants::LOGO_BADGE_WIDTH;
use super::super::view::Ui;
use super::util::truncate_with_ellipsis;

const TIME_ONLY: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");
const DATE_AND_TIME: &[BorrowedFormatItem<'_>] = format_description!("[month]/[day] [hour]:[minute]");

impl Ui<'_> {
    pub(in crate::tui) fn draw_banner(&self, f: &mut Frame<'_>, area: Rect) {
        let snapshot = self.session.snapshot();
        let frame = self.session.frame();

        // The background stays keyed to the current entry type even while
        // the content itself is faded out.
        let background = match &frame.item {
            Some(TickerItem::Score(_)) => Color::Blue,
            Some(TickerItem::News(_)) => Color::DarkGray,
            None => Color::Black,
        };

        let block = Block::default()
            .title("on air")
            .borders(Borders::ALL)
            .style(Style::default().bg(background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LOGO_BADGE_WIDTH), Constraint::Min(10)])
            .split(inner);

        self.draw_logo_badge(f, columns[0], snapshot.logo.as_ref());
        self.draw_banner_content(f, columns[1], &frame);
    }

    fn draw_logo_badge(&self, f: &mut Frame<'_>, area: Rect, logo: Option<&LogoHandle>) {
        let width = usize::from(area.width.saturating_sub(2));
        let label = logo.map_or_else(
            || "no logo".to_owned(),
            |handle| format!("⬢ {}", truncate_with_ellipsis(handle.as_str(), width)),
        );
        let badge = Paragraph::new(Line::from(label))
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
        f.render_widget(badge, area);
    }

    fn draw_banner_content(&self, f: &mut Frame<'_>, area: Rect, frame: &BannerFrame) {
        let Some(item) = &frame.item else {
            let placeholder = Paragraph::new(Line::from("No items"))
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);
            f.render_widget(placeholder, area);
            return;
        };
        if !frame.visible {
            // Fade phase: background only.
            return;
        }

        let (line, alignment) = match item {
            TickerItem::Score(score) => (
                score_line(score, OffsetDateTime::now_utc()),
                Alignment::Center,
            ),
            TickerItem::News(news) => (
                Line::from(Span::styled(
                    self.marquee.window(&news.text, usize::from(area.width)),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Alignment::Left,
            ),
        };

        f.render_widget(Paragraph::new(line).alignment(alignment), area);
    }
}

fn score_line(score: &ScoreItem, now: OffsetDateTime) -> Line<'static> {
    let separator = || Span::styled(" | ", Style::default().fg(Color::White));
    Line::from(vec![
        Span::styled(
            score.league.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("{} vs {}", score.team_a, score.team_b),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(
            format_start_time(score.start_time, now),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(score.additional_info.clone(), Style::default().fg(Color::Gray)),
    ])
}

/// "Today at HH:MM" for same-day starts, a short date otherwise.
pub(in crate::tui) fn format_start_time(start: OffsetDateTime, now: OffsetDateTime) -> String {
    if start.date() == now.date() {
        start
            .format(TIME_ONLY)
            .map_or_else(|_| start.to_string(), |time| format!("Today at {time}"))
    } else {
        start
            .format(DATE_AND_TIME)
            .unwrap_or_else(|_| start.to_string())
    }
}
