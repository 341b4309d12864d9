use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use chyron_core::{ItemId, TickerItem};

use super::super::constants::{LINEUP_HIGHLIGHT_SYMBOL, LIST_HEADLINE_GRAPHEMES, MARK_SYMBOL};
use super::super::view::{Ui, item_text};
use super::util::truncate_with_ellipsis;

impl Ui<'_> {
    pub(in crate::tui) fn draw_item_list(&self, f: &mut Frame<'_>, area: Rect) {
        let snapshot = self.session.snapshot();
        let on_air = self.session.frame().item.map(|item| item.id());

        let items: Vec<ListItem<'_>> = if snapshot.sequence.is_empty() {
            vec![ListItem::new(Line::from(
                "lineup is empty -- press n (news) or s (score) to add an entry",
            ))]
        } else {
            snapshot
                .sequence
                .iter()
                .map(|item| {
                    let mark = if self.marked.contains(&item.id()) {
                        MARK_SYMBOL
                    } else {
                        "  "
                    };
                    let text = item_text(item);
                    let headline = truncate_with_ellipsis(&text, LIST_HEADLINE_GRAPHEMES);
                    let title = Span::styled(
                        format!("{mark}{headline}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    );

                    let mut meta = format!("{} | {}", item.kind_label(), short_id(item.id()));
                    if on_air == Some(item.id()) {
                        meta.push_str(" | on air");
                    }
                    let meta_span = Span::styled(meta, Style::default().fg(Color::DarkGray));

                    ListItem::new(vec![Line::from(vec![title]), Line::from(vec![meta_span])])
                })
                .collect()
        };

        let list = List::new(items)
            .block(Block::default().title("lineup").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(LINEUP_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if !snapshot.sequence.is_empty() {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn short_id(id: ItemId) -> String {
    id.to_string().chars().take(8).collect()
}
