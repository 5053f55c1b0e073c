use interview_core::{AppViewModel, Role, UploadPhase};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::Focus;

use super::{layout, markdown};

pub fn draw(frame: &mut Frame, view: &AppViewModel, focus: Focus) {
    let panes = layout::panes(frame.area(), view.chat_open);

    draw_resume(frame, panes.resume, view, focus);
    draw_keywords(frame, panes.keywords, view);
    if view.chat_open {
        draw_transcript(frame, panes.transcript, view);
        draw_composer(frame, panes.composer, view, focus);
    }
    draw_status(frame, panes.status, view);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn phase_label(view: &AppViewModel) -> &'static str {
    match view.phase {
        UploadPhase::Idle => "Select a resume",
        UploadPhase::FileSelected => "Ready to upload",
        UploadPhase::Uploading => "Uploading...",
        UploadPhase::KeywordsReady => "Keywords ready",
        UploadPhase::UploadFailed => "Upload failed",
    }
}

fn draw_resume(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    view: &AppViewModel,
    focus: Focus,
) {
    let title = format!("Resume path ({})", phase_label(view));
    let widget = Paragraph::new(view.resume_input.as_str()).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focus == Focus::ResumePath)),
    );
    frame.render_widget(widget, area);
}

fn draw_keywords(frame: &mut Frame, area: ratatui::layout::Rect, view: &AppViewModel) {
    if view.keywords.is_empty() {
        let hint = match &view.upload_error {
            Some(error) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from("Upload a resume (.pdf) to unlock the interview chat."),
        };
        let widget = Paragraph::new(hint)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Extracted Keywords").borders(Borders::ALL));
        frame.render_widget(widget, area);
        return;
    }

    let items: Vec<ListItem> = view
        .keywords
        .iter()
        .map(|keyword| ListItem::new(keyword.as_str()))
        .collect();
    let mut block = Block::default()
        .title("Extracted Keywords")
        .borders(Borders::ALL);
    if let Some(error) = &view.upload_error {
        block = block.title_bottom(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(List::new(items), inner);
}

fn draw_transcript(frame: &mut Frame, area: ratatui::layout::Rect, view: &AppViewModel) {
    let mut lines: Vec<Line> = Vec::new();
    for row in &view.transcript {
        match row.role {
            Role::User => {
                lines.push(Line::from(Span::styled(
                    "You",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                for content_line in row.content.lines() {
                    lines.push(Line::from(content_line.to_string()));
                }
                if row.awaiting_reply {
                    lines.push(Line::from(Span::styled(
                        "(waiting for reply)",
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                }
            }
            Role::Assistant => {
                lines.push(Line::from(Span::styled(
                    "Interviewer",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.extend(markdown::to_lines(&row.content));
            }
        }
        lines.push(Line::from(""));
    }

    // Keep the newest turns in view; wrapping may still hide a little.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let widget = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title("Technical Interview Chat")
                .borders(Borders::ALL),
        );
    frame.render_widget(widget, area);
}

fn draw_composer(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    view: &AppViewModel,
    focus: Focus,
) {
    let widget = Paragraph::new(view.composer.as_str()).block(
        Block::default()
            .title("Ask a question...")
            .borders(Borders::ALL)
            .border_style(border_style(focus == Focus::Composer)),
    );
    frame.render_widget(widget, area);
}

fn draw_status(frame: &mut Frame, area: ratatui::layout::Rect, view: &AppViewModel) {
    let status = if let Some(error) = &view.chat_error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else if view.awaiting_replies > 0 {
        Line::from(format!(
            "Interviewer is thinking ({} pending)",
            view.awaiting_replies
        ))
    } else {
        Line::from(Span::styled(
            "Tab switches fields, Enter sends, Esc quits",
            Style::default().add_modifier(Modifier::DIM),
        ))
    };
    frame.render_widget(Paragraph::new(status), area);
}
