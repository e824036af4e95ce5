use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::TuiState;
use crate::tui::component::Component;

const HINTS: &str = "/ actions · Enter send · Ctrl+J newline · Esc unfocus · Ctrl+C quit";

/// Width of the composer in a terminal `available` columns wide.
pub fn composer_width(max_width: u16, available: u16) -> u16 {
    max_width.min(available).max(1)
}

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let width = composer_width(tui.max_width, area.width);
    let composer_height = tui
        .composer
        .height(width)
        .min(area.height.saturating_sub(1));

    let [page_area, composer_row, hints_area] =
        Layout::vertical([Min(0), Length(composer_height), Length(1)]).areas(area);
    let column = |row: Rect| {
        let [centred] = Layout::horizontal([Length(width)])
            .flex(Flex::Center)
            .areas(row);
        centred
    };

    draw_page(frame, column(page_area), tui);
    frame.render_widget(
        Line::from(HINTS).centered().add_modifier(Modifier::DIM),
        hints_area,
    );
    // Composer last: its menu panel may overlap the page
    tui.composer.render(frame, column(composer_row));
}

fn draw_page(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let mut lines = Vec::new();
    match &tui.last_submission {
        Some(submission) => {
            lines.push(Line::from("Sent".bold()));
            if !submission.badges.is_empty() {
                let labels: Vec<Span> = submission
                    .badges
                    .iter()
                    .map(|badge| {
                        Span::styled(
                            format!("[{}] ", badge.label),
                            Style::default().fg(badge.color.into()),
                        )
                    })
                    .collect();
                lines.push(Line::from(labels));
            }
            lines.extend(submission.text.lines().map(|l| Line::from(l.to_string())));
        }
        None => lines.push(Line::from("Type a prompt below. Press / for actions.").dim()),
    }
    if !tui.status_message.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(tui.status_message.as_str()).italic());
    }

    let height = (lines.len() as u16).min(area.height);
    let [bottom] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::End)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), bottom);
}
