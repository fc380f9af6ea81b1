//! Status bar rendering with keybindings and playback indicators

use crate::config::Scale;
use crate::playback::{PlaybackState, PlaybackStatus};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub playback: PlaybackState,
    pub scale: Scale,
    pub available: bool,
}

/// Text of the step counter, `Step -/0` when nothing is loaded
pub fn step_text(playback: &PlaybackState) -> String {
    if playback.total == 0 {
        " Step -/0 ".to_string()
    } else {
        format!(" Step {}/{} ", playback.current_index + 1, playback.total)
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let playback = &data.playback;

    let left_spans = vec![
        Span::styled(
            step_text(playback),
            Style::default()
                .bg(if data.available {
                    DEFAULT_THEME.primary
                } else {
                    DEFAULT_THEME.error
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} · {:.2}x ", playback.speed.label(), data.scale.value()),
            bar.fg(DEFAULT_THEME.secondary),
        ),
        Span::styled(format!(" {} ", data.message), bar.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" ↵ / ⌫ ", " end/start "),
        (" n/p ", " operation "),
        (" +/- ", " speed "),
        (" [/] ", " scale "),
        ("q", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };
    let indicator = if playback.status == PlaybackStatus::Playing {
        Some(badge(" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if playback.total > 0 && playback.current_index + 1 >= playback.total {
        Some(badge(" END ", DEFAULT_THEME.error))
    } else if playback.total > 0 && playback.current_index == 0 {
        Some(badge(" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some(indicator) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator);
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Speed;

    #[test]
    fn test_step_text() {
        let mut state = PlaybackState {
            current_index: 2,
            total: 5,
            status: PlaybackStatus::Paused,
            speed: Speed::Normal,
        };
        assert_eq!(step_text(&state), " Step 3/5 ");
        state.total = 0;
        state.current_index = 0;
        assert_eq!(step_text(&state), " Step -/0 ");
    }
}
