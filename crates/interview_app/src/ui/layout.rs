use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct Panes {
    pub resume: Rect,
    pub keywords: Rect,
    pub transcript: Rect,
    pub composer: Rect,
    pub status: Rect,
}

/// Splits the frame: resume input on top, keyword strip below it, transcript
/// filling the middle, composer and status line at the bottom. Before the
/// chat unlocks, the keyword strip takes the whole middle.
pub fn panes(area: Rect, chat_open: bool) -> Panes {
    if chat_open {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);
        Panes {
            resume: chunks[0],
            keywords: chunks[1],
            transcript: chunks[2],
            composer: chunks[3],
            status: chunks[4],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);
        Panes {
            resume: chunks[0],
            keywords: chunks[1],
            transcript: Rect::default(),
            composer: Rect::default(),
            status: chunks[2],
        }
    }
}
