//! Renders assistant markdown into styled terminal lines.
//!
//! Block structure (paragraphs, headings, lists, code blocks) is preserved;
//! inline emphasis becomes terminal styling. Anything the parser does not
//! recognize falls through as plain text.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn to_lines(markdown: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = LineRenderer::default();
    for event in Parser::new_ext(markdown, options) {
        renderer.push_event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct LineRenderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    bold: usize,
    italic: usize,
    in_code_block: bool,
    list_depth: usize,
}

impl LineRenderer {
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => {}
            Event::End(Tag::Paragraph) => {
                self.flush_line();
                self.blank_line();
            }
            Event::Start(Tag::Heading(..)) => {
                self.flush_line();
                self.bold += 1;
            }
            Event::End(Tag::Heading(..)) => {
                self.bold = self.bold.saturating_sub(1);
                self.flush_line();
                self.blank_line();
            }
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(Tag::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic += 1,
            Event::End(Tag::Emphasis) => self.italic = self.italic.saturating_sub(1),
            Event::Start(Tag::List(_)) => {
                self.flush_line();
                self.list_depth += 1;
            }
            Event::End(Tag::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.current.push(Span::raw(format!("{indent}- ")));
            }
            Event::End(Tag::Item) => self.flush_line(),
            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(Tag::CodeBlock(_)) => {
                self.in_code_block = false;
                self.blank_line();
            }
            Event::Start(Tag::BlockQuote) | Event::End(Tag::BlockQuote) => self.flush_line(),
            Event::Text(text) => {
                if self.in_code_block {
                    for code_line in text.lines() {
                        self.lines.push(Line::from(Span::styled(
                            format!("    {code_line}"),
                            code_style(),
                        )));
                    }
                } else {
                    let style = self.inline_style();
                    self.current.push(Span::styled(text.into_string(), style));
                }
            }
            Event::Code(code) => {
                self.current
                    .push(Span::styled(code.into_string(), code_style()));
            }
            Event::SoftBreak => self.current.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from("----"));
            }
            _ => {}
        }
    }

    fn inline_style(&self) -> Style {
        let mut style = Style::default();
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank_line(&mut self) {
        // `Line::default()` keeps blank separators distinguishable from
        // content lines, which always carry at least one span.
        if matches!(self.lines.last(), Some(last) if !last.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while matches!(self.lines.last(), Some(last) if last.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow)
}
