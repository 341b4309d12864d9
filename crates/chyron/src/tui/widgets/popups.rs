use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::view::{DeleteTarget, Ui};
use super::util::centered_popup;

impl Ui<'_> {
    pub(in crate::tui) fn draw_confirm_delete_popup(&self, f: &mut Frame<'_>, target: &DeleteTarget) {
        let area = centered_popup(f.area(), 40, 30, 5);

        let count = match target {
            DeleteTarget::Selected(_) => 1,
            DeleteTarget::Marked => self.marked.len(),
        };
        let noun = if count == 1 { "entry" } else { "entries" };

        let block = Block::default()
            .title("confirm delete")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black));

        f.render_widget(Clear, area);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let paragraph = Paragraph::new(vec![
            Line::from(format!("Delete {count} {noun}?")),
            Line::from("y: delete  n/Esc: cancel"),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
    }

    pub(in crate::tui) fn draw_logo_popup(&self, f: &mut Frame<'_>, value: &str) {
        let area = centered_popup(f.area(), 60, 40, 5);

        let block = Block::default()
            .title("logo handle")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        f.render_widget(Clear, area);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let paragraph = Paragraph::new(vec![
            Line::from(format!("> {value}")),
            Line::from(Span::styled(
                "Enter: set  Esc: cancel  (empty input keeps the current logo)",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        f.render_widget(paragraph, inner);
    }
}
