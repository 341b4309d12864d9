use std::collections::BTreeSet;
use std::io::Stdout;
use std::mem;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};

use chyron_core::{LogoHandle, TickerItem};

use super::editor;
use super::terminal::{launch_editor, with_terminal_suspended};
use super::view::{DeleteTarget, Mode, Ui, UiAction, item_text};

impl Ui<'_> {
    /// Dispatch a key press; returns an action when the terminal must be
    /// suspended for an external editor.
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        match &self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::ConfirmDelete(_) => {
                self.handle_confirm_key(key);
                None
            }
            Mode::LogoInput(_) => {
                self.handle_logo_key(key);
                None
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        let len = self.session.len();
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.marked.clear();
                self.message = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = len.saturating_sub(1);
            }
            KeyCode::Char('n') => return Some(UiAction::AddNews),
            KeyCode::Char('s') => return Some(UiAction::AddScore),
            KeyCode::Enter | KeyCode::Char('e') => {
                return self.selected_item().map(|item| UiAction::EditItem { item });
            }
            KeyCode::Char('d') => {
                if let Some(item) = self.selected_item() {
                    self.mode = Mode::ConfirmDelete(DeleteTarget::Selected(item.id()));
                }
            }
            KeyCode::Char('D') => {
                if self.marked.is_empty() {
                    self.info("no marked entries");
                } else {
                    self.mode = Mode::ConfirmDelete(DeleteTarget::Marked);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(item) = self.selected_item() {
                    let id = item.id();
                    if !self.marked.remove(&id) {
                        self.marked.insert(id);
                    }
                }
            }
            KeyCode::Char('J') => {
                if self.selected + 1 < len {
                    self.session
                        .move_item(self.selected, self.selected + 1, Instant::now());
                    self.selected += 1;
                }
            }
            KeyCode::Char('K') => {
                if self.selected > 0 && self.selected < len {
                    self.session
                        .move_item(self.selected, self.selected - 1, Instant::now());
                    self.selected -= 1;
                }
            }
            KeyCode::Char('l') => {
                let current = self
                    .session
                    .snapshot()
                    .logo
                    .map(|logo| logo.as_str().to_owned())
                    .unwrap_or_default();
                self.mode = Mode::LogoInput(current);
            }
            KeyCode::Char('L') => {
                self.session.set_logo(None, Instant::now());
                self.info("logo cleared");
            }
            KeyCode::Char('y') => {
                if let Some(item) = self.selected_item() {
                    match self.clipboard.set_text(&item_text(&item)) {
                        Ok(()) => self.info("entry text copied"),
                        Err(err) => self.error(format!("clipboard copy failed: {err}")),
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let Mode::ConfirmDelete(target) = mem::replace(&mut self.mode, Mode::Browse) else {
                    return;
                };
                match target {
                    DeleteTarget::Selected(id) => {
                        self.session.remove(id, Instant::now());
                        self.info("entry deleted");
                    }
                    DeleteTarget::Marked => {
                        let positions: BTreeSet<usize> = self
                            .marked
                            .iter()
                            .filter_map(|id| self.session.position(*id))
                            .collect();
                        let count = positions.len();
                        self.session.remove_at(&positions, Instant::now());
                        self.marked.clear();
                        self.info(format!("{count} entries deleted"));
                    }
                }
                self.sync_after_change();
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn handle_logo_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let Mode::LogoInput(value) = mem::replace(&mut self.mode, Mode::Browse) else {
                    return;
                };
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    self.info("logo unchanged");
                } else {
                    self.session
                        .set_logo(Some(LogoHandle::new(trimmed)), Instant::now());
                    self.info("logo set");
                }
            }
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                if let Mode::LogoInput(value) = &mut self.mode {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Mode::LogoInput(value) = &mut self.mode {
                    value.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Run an action that needs the terminal suspended (external editor flows).
pub(super) fn handle_ui_action(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ui: &mut Ui<'_>,
    action: UiAction,
) -> Result<()> {
    match action {
        UiAction::AddNews => {
            let raw = with_terminal_suspended(terminal, || launch_editor(&editor::news_template(None)))?;
            match editor::parse_news_output(&raw, None) {
                Ok(Some(news)) => {
                    ui.session.add(TickerItem::News(news), Instant::now());
                    ui.info("news entry added");
                }
                Ok(None) => ui.info("add cancelled"),
                Err(err) => ui.error(err),
            }
        }
        UiAction::AddScore => {
            let raw = with_terminal_suspended(terminal, || launch_editor(&editor::score_template(None)))?;
            match editor::parse_score_output(&raw, None) {
                Ok(Some(score)) => {
                    ui.session.add(TickerItem::Score(score), Instant::now());
                    ui.info("score entry added");
                }
                Ok(None) => ui.info("add cancelled"),
                Err(err) => ui.error(err),
            }
        }
        UiAction::EditItem { item } => match item {
            TickerItem::News(existing) => {
                let raw = with_terminal_suspended(terminal, || {
                    launch_editor(&editor::news_template(Some(&existing)))
                })?;
                match editor::parse_news_output(&raw, Some(&existing)) {
                    Ok(Some(news)) => {
                        // A concurrent delete makes this a silent no-op.
                        ui.session.update(TickerItem::News(news), Instant::now());
                        ui.info("news entry updated");
                    }
                    Ok(None) => ui.info("edit cancelled"),
                    Err(err) => ui.error(err),
                }
            }
            TickerItem::Score(existing) => {
                let raw = with_terminal_suspended(terminal, || {
                    launch_editor(&editor::score_template(Some(&existing)))
                })?;
                match editor::parse_score_output(&raw, Some(&existing)) {
                    Ok(Some(score)) => {
                        ui.session.update(TickerItem::Score(score), Instant::now());
                        ui.info("score entry updated");
                    }
                    Ok(None) => ui.info("edit cancelled"),
                    Err(err) => ui.error(err),
                }
            }
        },
    }
    ui.sync_after_change();
    Ok(())
}
