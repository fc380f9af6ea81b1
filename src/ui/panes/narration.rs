//! Narration pane: what the current step does, and a legend of its marks

use crate::catalog::Operation;
use crate::snapshot::{Annotated, Marks, Snapshot, StepMeta};
use crate::ui::theme::{Theme, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the narration pane
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    operation: Option<Operation>,
    meta: Option<&StepMeta>,
    snapshot: Option<&Snapshot>,
) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let lines = narration_lines(operation, meta, snapshot, &DEFAULT_THEME);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn narration_lines(
    operation: Option<Operation>,
    meta: Option<&StepMeta>,
    snapshot: Option<&Snapshot>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let dim = Style::default().fg(theme.comment);
    let Some(operation) = operation else {
        return vec![Line::styled("No operation selected.", dim)];
    };

    let (time, space) = operation.complexity();
    let mut lines = vec![
        Line::styled(
            operation.title().to_string(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("time {}  space {}", time, space), dim),
        Line::from(""),
    ];

    if let Some(meta) = meta {
        lines.push(Line::styled(
            meta.title.clone(),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            meta.description.clone(),
            Style::default().fg(theme.fg),
        ));
        if !meta.explanation.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                meta.explanation.clone(),
                dim.add_modifier(Modifier::ITALIC),
            ));
        }
    }

    if let Some(snapshot) = snapshot {
        let shown = snapshot.all_marks() & !Marks::LEAF;
        if !shown.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled("Legend", dim));
            for (mark, label) in Marks::LABELS.iter().filter(|(m, _)| shown.contains(*m)) {
                lines.push(Line::from(vec![
                    Span::styled(" ■ ", theme.mark_style(*mark)),
                    Span::styled(format!(" {}", label), Style::default().fg(theme.fg)),
                ]));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SequenceState;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_no_operation() {
        let lines = narration_lines(None, None, None, &DEFAULT_THEME);
        assert_eq!(text(&lines), vec!["No operation selected."]);
    }

    #[test]
    fn test_meta_and_legend() {
        let meta = StepMeta::new("Compare", "Compare 20 with 35").explain("Sorted order");
        let mut state = SequenceState::from_values(&[20, 35]);
        state.mark(0, Marks::COMPARING);
        let snapshot: Snapshot = state.into();

        let lines = text(&narration_lines(
            Some(Operation::OrderedListInsert),
            Some(&meta),
            Some(&snapshot),
            &DEFAULT_THEME,
        ));
        assert!(lines.contains(&"Compare 20 with 35".to_string()));
        assert!(lines.contains(&"Sorted order".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some(" ■  comparing"));
    }
}
