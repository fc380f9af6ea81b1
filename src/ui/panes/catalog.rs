//! Catalog pane: every operation grouped by family

use crate::catalog::{Family, Operation};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Catalog rows: a header per family followed by its operations.
///
/// Returns the rows and the row index of `selected`, if present.
pub fn catalog_rows(selected: Option<Operation>) -> (Vec<(Option<Operation>, String)>, Option<usize>) {
    let mut rows = Vec::with_capacity(Family::ALL.len() + Operation::ALL.len());
    let mut selected_row = None;
    for family in Family::ALL {
        rows.push((None, family.name().to_string()));
        for operation in Operation::ALL.iter().filter(|op| op.family() == family) {
            if Some(*operation) == selected {
                selected_row = Some(rows.len());
            }
            rows.push((Some(*operation), format!("  {}", operation.title())));
        }
    }
    (rows, selected_row)
}

/// Render the catalog, keeping the selected row in view
pub fn render_catalog_pane(frame: &mut Frame, area: Rect, selected: Option<Operation>) {
    let block = Block::default()
        .title(" Operations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let (rows, selected_row) = catalog_rows(selected);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let scroll = selected_row
        .map_or(0, |row| (row + 1).saturating_sub(visible_height))
        .min(rows.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
        .map(|(index, (operation, text))| {
            let style = match operation {
                None => Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
                Some(_) if Some(index) == selected_row => Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(DEFAULT_THEME.fg),
            };
            ListItem::new(Line::styled(text, style))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
