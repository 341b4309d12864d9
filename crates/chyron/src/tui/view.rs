use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use chyron_app::TickerSession;
use chyron_core::{ItemId, TickerItem};

use super::clipboard::{ClipboardSink, default_clipboard};
use super::constants::{BANNER_HEIGHT, MAIN_MIN_HEIGHT, STATUS_FOOTER_HEIGHT, UI_MESSAGE_TTL_SECS};
use super::marquee::MarqueeState;

/// What a confirmed delete will remove.
#[derive(Debug, Clone)]
pub(super) enum DeleteTarget {
    /// The entry under the selection.
    Selected(ItemId),
    /// Every marked entry.
    Marked,
}

/// Input mode of the control panel.
#[derive(Debug, Clone)]
pub(super) enum Mode {
    /// Normal lineup navigation.
    Browse,
    /// Waiting for delete confirmation.
    ConfirmDelete(DeleteTarget),
    /// Line input for the logo handle.
    LogoInput(String),
}

/// Actions that need the terminal suspended (external editor flows).
#[derive(Debug, Clone)]
pub(super) enum UiAction {
    /// Create a news entry.
    AddNews,
    /// Create a score entry.
    AddScore,
    /// Edit an existing entry; carries a copy of its current content.
    EditItem {
        /// Entry content at the moment the edit started.
        item: TickerItem,
    },
}

pub(super) struct Ui<'a> {
    pub(super) session: &'a TickerSession,
    pub(super) selected: usize,
    pub(super) marked: BTreeSet<ItemId>,
    pub(super) mode: Mode,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) marquee: MarqueeState,
    pub(super) clipboard: Box<dyn ClipboardSink>,
}

impl<'a> Ui<'a> {
    pub(super) fn new(session: &'a TickerSession) -> Self {
        Self::with_clipboard(session, default_clipboard())
    }

    pub(super) fn with_clipboard(session: &'a TickerSession, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            session,
            selected: 0,
            marked: BTreeSet::new(),
            mode: Mode::Browse,
            message: None,
            should_quit: false,
            marquee: MarqueeState::new(),
            clipboard,
        }
    }

    /// Entry under the selection, if the lineup is non-empty.
    pub(super) fn selected_item(&self) -> Option<TickerItem> {
        self.session.snapshot().sequence.get(self.selected).cloned()
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BANNER_HEIGHT),
                Constraint::Min(MAIN_MIN_HEIGHT),
                Constraint::Length(STATUS_FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.draw_banner(f, chunks[0]);
        self.draw_item_list(f, chunks[1]);
        self.draw_status(f, chunks[2]);

        match &self.mode {
            Mode::ConfirmDelete(target) => self.draw_confirm_delete_popup(f, target),
            Mode::LogoInput(value) => self.draw_logo_popup(f, value),
            Mode::Browse => {}
        }
    }

    fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("keys");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let hints = Paragraph::new(Line::from(
            "n/s add  e edit  d del  space mark  D del marked  J/K move  l/L logo  y copy  q quit",
        ))
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, rows[0]);

        if let Some(message) = &self.message {
            let paragraph = Paragraph::new(Line::from(message.text.as_str())).style(message.style());
            f.render_widget(paragraph, rows[1]);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    /// Periodic tick: advance the rotation, the marquee, and message expiry.
    pub(super) fn tick(&mut self, now: Instant) {
        self.session.tick(now);
        self.sync_after_change();

        let frame = self.session.frame();
        let visible = frame.visible;
        match frame.item {
            Some(TickerItem::News(news)) if visible => self.marquee.step(news.id),
            _ => self.marquee.reset(),
        }

        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }

    /// Clamp the selection and drop marks whose entries are gone.
    pub(super) fn sync_after_change(&mut self) {
        let snapshot = self.session.snapshot();
        let len = snapshot.sequence.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        let live: BTreeSet<ItemId> = snapshot.sequence.iter().map(TickerItem::id).collect();
        self.marked.retain(|id| live.contains(id));
    }
}

/// One-line text of an entry, used for the lineup rows and clipboard copy.
pub(super) fn item_text(item: &TickerItem) -> String {
    match item {
        TickerItem::News(news) => news.text.clone(),
        TickerItem::Score(score) => {
            let mut text = format!("{}: {} vs {}", score.league, score.team_a, score.team_b);
            if !score.additional_info.is_empty() {
                text.push_str(" (");
                text.push_str(&score.additional_info);
                text.push(')');
            }
            text
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
