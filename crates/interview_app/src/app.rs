use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use interview_core::{update, AppState, AppViewModel, Msg};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::effects::EffectRunner;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which input box currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ResumePath,
    Composer,
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Quit,
    Redraw,
    Dispatch(Vec<Msg>),
    Ignored,
}

pub fn run_app() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx);

    let mut state = AppState::new();
    let mut focus = Focus::ResumePath;

    let view = state.view();
    terminal.draw(|frame| ui::render::draw(frame, &view, focus))?;

    loop {
        let mut inbox: Vec<Msg> = Vec::new();
        let mut force_redraw = false;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match translate_key(key.code, key.modifiers, &mut focus, &state.view()) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Redraw => force_redraw = true,
                        KeyAction::Dispatch(msgs) => inbox.extend(msgs),
                        KeyAction::Ignored => {}
                    }
                }
            }
        }

        // Engine completions arrive on the channel and fold into the same
        // update loop as keyboard input.
        while let Ok(msg) = msg_rx.try_recv() {
            inbox.push(msg);
        }

        for msg in inbox {
            dispatch(&mut state, &runner, msg);
        }

        if state.consume_dirty() || force_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::draw(frame, &view, focus))?;
        }
    }
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.run(effects);
}

fn translate_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    focus: &mut Focus,
    view: &AppViewModel,
) -> KeyAction {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => {
            let next = match *focus {
                // The composer only exists once keywords unlocked the chat.
                Focus::ResumePath if view.chat_open => Focus::Composer,
                Focus::Composer => Focus::ResumePath,
                other => other,
            };
            if next == *focus {
                KeyAction::Ignored
            } else {
                *focus = next;
                KeyAction::Redraw
            }
        }
        KeyCode::Enter => match *focus {
            Focus::ResumePath => {
                KeyAction::Dispatch(vec![Msg::ResumeSubmitted, Msg::UploadRequested])
            }
            Focus::Composer => KeyAction::Dispatch(vec![Msg::MessageSubmitted]),
        },
        KeyCode::Backspace => {
            let msg = match *focus {
                Focus::ResumePath => {
                    let mut text = view.resume_input.clone();
                    text.pop();
                    Msg::ResumeInputChanged(text)
                }
                Focus::Composer => {
                    let mut text = view.composer.clone();
                    text.pop();
                    Msg::ComposerChanged(text)
                }
            };
            KeyAction::Dispatch(vec![msg])
        }
        KeyCode::Char(ch) => {
            let msg = match *focus {
                Focus::ResumePath => Msg::ResumeInputChanged(format!("{}{}", view.resume_input, ch)),
                Focus::Composer => Msg::ComposerChanged(format!("{}{}", view.composer, ch)),
            };
            KeyAction::Dispatch(vec![msg])
        }
        _ => KeyAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_resume_field_submits_then_uploads() {
        let mut focus = Focus::ResumePath;
        let action = translate_key(
            KeyCode::Enter,
            KeyModifiers::NONE,
            &mut focus,
            &AppViewModel::default(),
        );
        assert_eq!(
            action,
            KeyAction::Dispatch(vec![Msg::ResumeSubmitted, Msg::UploadRequested])
        );
    }

    #[test]
    fn tab_is_ignored_until_chat_opens() {
        let mut focus = Focus::ResumePath;
        let action = translate_key(
            KeyCode::Tab,
            KeyModifiers::NONE,
            &mut focus,
            &AppViewModel::default(),
        );
        assert_eq!(action, KeyAction::Ignored);
        assert_eq!(focus, Focus::ResumePath);

        let view = AppViewModel {
            chat_open: true,
            ..AppViewModel::default()
        };
        let action = translate_key(KeyCode::Tab, KeyModifiers::NONE, &mut focus, &view);
        assert_eq!(action, KeyAction::Redraw);
        assert_eq!(focus, Focus::Composer);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let view = AppViewModel {
            chat_open: true,
            composer: "hell".to_string(),
            ..AppViewModel::default()
        };

        let mut focus = Focus::Composer;
        let action = translate_key(KeyCode::Char('o'), KeyModifiers::NONE, &mut focus, &view);
        assert_eq!(
            action,
            KeyAction::Dispatch(vec![Msg::ComposerChanged("hello".to_string())])
        );

        let mut focus = Focus::ResumePath;
        let action = translate_key(KeyCode::Char('r'), KeyModifiers::NONE, &mut focus, &view);
        assert_eq!(
            action,
            KeyAction::Dispatch(vec![Msg::ResumeInputChanged("r".to_string())])
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let mut focus = Focus::Composer;
        let action = translate_key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            &mut focus,
            &AppViewModel::default(),
        );
        assert_eq!(action, KeyAction::Quit);
    }
}
