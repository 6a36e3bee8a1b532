use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::{App, InputMode, Phase};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 13 || area.width < 44 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Score line(1) + Rows(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_score_line(frame, chunks[1], app);
    render_rows(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::Help => render_help_popup(frame),
        InputMode::ScoringInfo => render_scoring_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "listl";
    let right = format!(
        "games: {}  high: {}",
        app.stats.games_played, app.stats.high_score
    );
    let padding = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme::TITLE_COLOR).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(theme::MUTED)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_score_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.phase {
        Phase::Playing => Line::from(Span::styled(
            format!("{} — drag into order, then submit", app.def.title),
            Style::default().fg(theme::MUTED),
        )),
        Phase::Submitted => {
            let round = app
                .last_report
                .as_ref()
                .map(|r| r.total)
                .unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!(
                        "Total Score {}/{}",
                        app.stats.cumulative_score,
                        app.def.max_score()
                    ),
                    theme::header_style(),
                ),
                Span::styled(
                    format!("  (this round: {})", round),
                    Style::default().fg(theme::MUTED),
                ),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_rows(frame: &mut Frame, area: Rect, app: &mut App) {
    // The mouse handler maps cells back to rows through this rect, so it must
    // be exactly where the rows are drawn: one row per line, top-aligned.
    app.list_area = Some(area);

    let lines = match app.phase {
        Phase::Playing => playing_rows(app),
        Phase::Submitted => result_rows(app),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn playing_rows(app: &App) -> Vec<Line<'static>> {
    app.board
        .order()
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let dragging = app.board.active() == Some(idx);
            let style = if dragging {
                theme::dragging_style()
            } else if idx == app.cursor {
                theme::cursor_style()
            } else if idx % 2 == 1 {
                Style::default().bg(theme::ROW_ALT_BG)
            } else {
                Style::default()
            };

            let marker = if dragging { "↕" } else { " " };
            Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(theme::INDEX_COLOR)),
                Span::raw(format!("{} ", marker)),
                Span::raw(label.clone()),
            ])
            .style(style)
        })
        .collect()
}

fn result_rows(app: &App) -> Vec<Line<'static>> {
    let Some(report) = &app.last_report else {
        return vec![Line::from("No submission yet")];
    };

    report
        .per_rank
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            let color = if entry.correct {
                theme::CORRECT
            } else {
                theme::INCORRECT
            };
            let text = format!(
                "{:>2}. {} ({} - {}) {}/{}",
                rank + 1,
                entry.label,
                entry.correct_label,
                app.def.fact(rank),
                entry.points_earned,
                entry.max_points
            );
            Line::from(Span::styled(text, Style::default().fg(color)))
        })
        .collect()
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Cannot") {
            theme::FLASH_ERROR
        } else if msg.starts_with("Scored") || msg.contains("copied") {
            theme::FLASH_SUCCESS
        } else {
            Color::White
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: Vec<(&str, &str)> = match app.phase {
            Phase::Playing => vec![
                ("j/k", ":move "),
                ("Space", ":grab "),
                ("drag", ":mouse "),
                ("s", ":submit "),
                ("i", ":scoring "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Phase::Submitted => vec![
                ("n", ":new round "),
                ("c", ":share "),
                ("i", ":scoring "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(key, Style::default().fg(theme::STATUS_KEY_COLOR)));
            spans.push(Span::raw(label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(46, 14, frame.area());

    frame.render_widget(Clear, popup_area);
    let block = Block::bordered().title(" Keyboard Shortcuts ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down    ", key_style),
            Span::raw("Move cursor (or grabbed row) down"),
        ]),
        Line::from(vec![
            Span::styled("k / Up      ", key_style),
            Span::raw("Move cursor (or grabbed row) up"),
        ]),
        Line::from(vec![
            Span::styled("Space       ", key_style),
            Span::raw("Grab / release the row under cursor"),
        ]),
        Line::from(vec![
            Span::styled("mouse drag  ", key_style),
            Span::raw("Drag a row to a new position"),
        ]),
        Line::from(vec![
            Span::styled("s           ", key_style),
            Span::raw("Submit the current order"),
        ]),
        Line::from(vec![
            Span::styled("n           ", key_style),
            Span::raw("New round (after submitting)"),
        ]),
        Line::from(vec![
            Span::styled("c           ", key_style),
            Span::raw("Share score (after submitting)"),
        ]),
        Line::from(vec![
            Span::styled("i           ", key_style),
            Span::raw("Show/hide scoring rules"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c  ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}

fn render_scoring_popup(frame: &mut Frame, app: &App) {
    let n = app.def.len() as u16;
    let width = 50.max(12 + 4 * n);
    let popup_area = centered_rect_fixed(width, n + 6, frame.area());

    frame.render_widget(Clear, popup_area);
    let block = Block::bordered().title(" Scoring ");
    frame.render_widget(block.clone(), popup_area);
    let inner = block.inner(popup_area);

    let label_width = app
        .def
        .entries()
        .iter()
        .map(|e| e.label.len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled(
            "Points per position (left = placed first)",
            Style::default().fg(theme::MUTED),
        )),
        Line::from(""),
    ];
    for entry in app.def.entries() {
        let row = entry
            .points
            .iter()
            .map(|p| format!("{:>3}", p))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:width$}", entry.label, width = label_width),
                Style::default().fg(theme::TITLE_COLOR),
            ),
            Span::raw("  "),
            Span::raw(row),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Maximum score: {}", app.def.max_score()),
        theme::header_style(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
