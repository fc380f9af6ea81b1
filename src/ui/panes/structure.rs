//! Structure pane: draws one snapshot
//!
//! [`structure_lines`] is a pure function of the snapshot, the theme and the
//! display scale. The pane and the `--dump` output both go through it.

use crate::config::Scale;
use crate::snapshot::{
    Cursor, Element, HeapState, Marks, MatrixState, Point, QueueState, SequenceState, SlotState,
    Snapshot, StackState, TreeNode, TreeState,
};
use crate::ui::theme::{Theme, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use std::fmt::Display;

/// Render the structure pane; `None` shows the "not available" state
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    title: &str,
    scale: Scale,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(2, 2, 1, 0));

    let paragraph = match snapshot {
        Some(snapshot) => Paragraph::new(structure_lines(snapshot, &DEFAULT_THEME, scale)),
        None => Paragraph::new(vec![
            Line::from("Visualization not available for this operation."),
            Line::from(""),
            Line::from("Press n / p to pick an operation from the catalog."),
        ])
        .style(Style::default().fg(DEFAULT_THEME.comment)),
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Styled lines drawing `snapshot`
pub fn structure_lines(snapshot: &Snapshot, theme: &Theme, scale: Scale) -> Vec<Line<'static>> {
    let width = scale.cell_width() as usize;
    match snapshot {
        Snapshot::Sequence(state) => sequence_lines(state, theme, width),
        Snapshot::Stack(state) => stack_lines(state, theme, width),
        Snapshot::Queue(state) => queue_lines(state, theme, width),
        Snapshot::Heap(state) => heap_lines(state, theme, width),
        Snapshot::Tree(state) => tree_lines(state, theme, width),
        Snapshot::Slots(state) => slot_lines(state, theme, width),
        Snapshot::Table(state) => slot_lines(state, theme, width),
        Snapshot::Matrix(state) => matrix_lines(state, theme, width),
    }
}

/// Lines without styling, for text output
pub fn plain_text(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

fn centered(text: impl Display, width: usize) -> String {
    format!("{:^width$}", text.to_string(), width = width)
}

/// Pointer names shown under a cell
fn pointer_label(marks: Marks) -> String {
    (marks & (Marks::STRUCTURAL - Marks::LEAF)).labels().join("/")
}

fn cell_span<T: Display>(element: &Element<T>, theme: &Theme, width: usize) -> Span<'static> {
    Span::styled(
        centered(&element.value, width),
        theme.mark_style(element.marks),
    )
}

/// One row of cells, a row of indices and, if any pointer is set, a row of labels
fn row_lines<T: Display>(
    cells: &[Option<&Element<T>>],
    theme: &Theme,
    width: usize,
    separator: &str,
) -> Vec<Line<'static>> {
    let gap = separator.chars().count();
    let mut values = Vec::new();
    let mut indices = Vec::new();
    let mut labels = Vec::new();

    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            values.push(Span::styled(
                separator.to_string(),
                Style::default().fg(theme.comment),
            ));
            indices.push(Span::raw(" ".repeat(gap)));
            labels.push(Span::raw(" ".repeat(gap)));
        }
        match cell {
            Some(element) => {
                values.push(cell_span(element, theme, width));
                labels.push(Span::styled(
                    centered(pointer_label(element.marks), width),
                    theme.label_style(),
                ));
            }
            None => {
                values.push(Span::styled(
                    centered("·", width),
                    Style::default().fg(theme.comment),
                ));
                labels.push(Span::raw(" ".repeat(width)));
            }
        }
        indices.push(Span::styled(
            centered(index, width),
            Style::default().fg(theme.comment),
        ));
    }

    let has_labels = cells
        .iter()
        .flatten()
        .any(|e| !pointer_label(e.marks).is_empty());
    let mut lines = vec![Line::from(values), Line::from(indices)];
    if has_labels {
        lines.push(Line::from(labels));
    }
    lines
}

fn sequence_lines(state: &SequenceState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    if state.is_empty() {
        return vec![Line::styled("(empty)", Style::default().fg(theme.comment))];
    }
    let cells: Vec<Option<&Element<i32>>> = state.elements.iter().map(Some).collect();
    let separator = if state.linked { " → " } else { " " };
    let mut lines = row_lines(&cells, theme, width, separator);
    if state.linked {
        lines[0]
            .spans
            .push(Span::styled(" → null", Style::default().fg(theme.comment)));
    }
    lines
}

fn stack_lines(state: &StackState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let border = Style::default().fg(theme.border_normal);
    let mut lines = Vec::new();

    for _ in state.len()..state.capacity {
        lines.push(Line::from(vec![
            Span::styled("│", border),
            Span::raw(" ".repeat(width)),
            Span::styled("│", border),
        ]));
    }
    for element in state.elements.iter().rev() {
        let mut spans = vec![
            Span::styled("│", border),
            cell_span(element, theme, width),
            Span::styled("│", border),
        ];
        let label = pointer_label(element.marks);
        if !label.is_empty() {
            spans.push(Span::styled(format!(" ← {}", label), theme.label_style()));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(format!("└{}┘", "─".repeat(width)), border));
    lines.push(Line::styled(
        format!(
            "size {} / capacity {}, top = {}",
            state.len(),
            state.capacity,
            state.top.map_or("-1".to_string(), |t| t.to_string())
        ),
        Style::default().fg(theme.comment),
    ));
    lines
}

fn queue_lines(state: &QueueState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    if state.is_empty() {
        return vec![Line::styled(
            "(empty)  front = 0, rear = -1",
            Style::default().fg(theme.comment),
        )];
    }
    let cells: Vec<Option<&Element<i32>>> = state.elements.iter().map(Some).collect();
    let mut lines = row_lines(&cells, theme, width, " ");
    lines.push(Line::styled(
        format!(
            "front = {}, rear = {}",
            state.front,
            state.rear.map_or("-1".to_string(), |r| r.to_string())
        ),
        Style::default().fg(theme.comment),
    ));
    lines
}

/// Nodes placed on a grid: `x` in cells, `y` in rows
fn grid_lines(
    mut nodes: Vec<(Point, Span<'static>)>,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    nodes.sort_by_key(|(pos, _)| (pos.y, pos.x));
    let rows = nodes.last().map_or(0, |(pos, _)| pos.y as usize + 1);
    let mut lines = Vec::with_capacity(rows * 2);

    for row in 0..rows {
        let mut spans = Vec::new();
        let mut column = 0usize;
        for (pos, span) in nodes.iter().filter(|(pos, _)| pos.y as usize == row) {
            let start = pos.x as usize * width;
            if start > column {
                spans.push(Span::raw(" ".repeat(start - column)));
            }
            column = start + width;
            spans.push(span.clone());
        }
        lines.push(Line::from(spans));
        if row + 1 < rows {
            lines.push(Line::styled("", Style::default().fg(theme.comment)));
        }
    }
    lines
}

fn heap_lines(state: &HeapState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    if state.is_empty() {
        return vec![Line::styled("(empty heap)", Style::default().fg(theme.comment))];
    }
    let nodes = state
        .elements
        .iter()
        .map(|e| (e.pos.unwrap_or_default(), cell_span(e, theme, width)))
        .collect();
    let mut lines = grid_lines(nodes, theme, width);

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "array view",
        Style::default().fg(theme.comment),
    ));
    let cells: Vec<Option<&Element<i32>>> = state.elements.iter().map(Some).collect();
    lines.extend(row_lines(&cells, theme, width, " "));
    lines
}

fn tree_lines(state: &TreeState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    fn collect(
        node: Option<&TreeNode>,
        theme: &Theme,
        width: usize,
        out: &mut Vec<(Point, Span<'static>)>,
    ) {
        if let Some(node) = node {
            out.push((
                node.element.pos.unwrap_or_default(),
                cell_span(&node.element, theme, width),
            ));
            collect(node.left.as_deref(), theme, width, out);
            collect(node.right.as_deref(), theme, width, out);
        }
    }

    if state.is_empty() {
        return vec![Line::styled("(empty tree)", Style::default().fg(theme.comment))];
    }
    let mut nodes = Vec::new();
    collect(state.root.as_deref(), theme, width, &mut nodes);
    grid_lines(nodes, theme, width)
}

fn slot_lines<T: Display>(state: &SlotState<T>, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !state.caption.is_empty() {
        lines.push(Line::styled(
            format!("hash(key) = {}", state.caption),
            Style::default().fg(theme.comment),
        ));
    }
    let cells: Vec<Option<&Element<T>>> = state.cells.iter().map(Option::as_ref).collect();
    lines.extend(row_lines(&cells, theme, width, " "));

    let pointers = match state.cursor {
        Cursor::Plain => None,
        Cursor::Top(top) => Some(format!(
            "top = {}",
            top.map_or("-1".to_string(), |t| t.to_string())
        )),
        Cursor::Queue { front, rear } => Some(format!(
            "front = {}, rear = {}",
            front,
            rear.map_or("-1".to_string(), |r| r.to_string())
        )),
    };
    if let Some(pointers) = pointers {
        lines.push(Line::styled(pointers, Style::default().fg(theme.comment)));
    }
    lines
}

fn matrix_lines(state: &MatrixState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD);
    let mut header = vec![Span::raw(" ".repeat(width))];
    header.extend(
        state
            .labels
            .iter()
            .map(|label| Span::styled(centered(label, width), header_style)),
    );

    let mut lines = vec![Line::from(header)];
    for (label, row) in state.labels.iter().zip(&state.cells) {
        let mut spans = vec![Span::styled(centered(label, width), header_style)];
        spans.extend(row.iter().map(|cell| cell_span(cell, theme, width)));
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Annotated;

    fn text(snapshot: Snapshot) -> Vec<String> {
        let mut snapshot = snapshot;
        snapshot.restamp();
        plain_text(&structure_lines(&snapshot, &DEFAULT_THEME, Scale::default()))
    }

    #[test]
    fn test_array_row_and_indices() {
        let lines = text(SequenceState::from_values(&[10, 20]).into());
        assert_eq!(lines, vec!["  10     20", "  0      1"]);
    }

    #[test]
    fn test_linked_list_shows_arrows_and_ends() {
        let lines = text(SequenceState::linked(&[1, 2]).into());
        assert!(lines[0].contains('→'));
        assert!(lines[0].ends_with("null"));
        assert!(lines[2].contains("head"));
        assert!(lines[2].contains("tail"));
    }

    #[test]
    fn test_stack_draws_top_first() {
        let lines = text(StackState::from_values(&[10, 20], 3).into());
        assert_eq!(lines.len(), 3 + 2);
        assert!(lines[1].contains("20"));
        assert!(lines[1].contains("top"));
        assert!(lines[2].contains("10"));
    }

    #[test]
    fn test_heap_grid_places_root_in_the_middle() {
        let lines = text(HeapState::from_values(&[9, 5, 7]).into());
        // depth 2 spans three columns, root at column 1
        assert_eq!(lines[0], format!("{}{}", " ".repeat(6), centered(9, 6)).trim_end());
    }

    #[test]
    fn test_empty_slots_and_pointers() {
        let slots: SlotState<i32> = SlotState::empty(3, Cursor::Top(None));
        let lines = text(slots.into());
        assert!(lines[0].contains('·'));
        assert_eq!(lines.last().map(String::as_str), Some("top = -1"));
    }

    #[test]
    fn test_scale_widens_cells() {
        let snapshot: Snapshot = SequenceState::from_values(&[1]).into();
        let wide = plain_text(&structure_lines(
            &snapshot,
            &DEFAULT_THEME,
            Scale::new(2.0).unwrap(),
        ));
        assert_eq!(wide[0], format!("{:^12}", 1).trim_end());
    }
}
