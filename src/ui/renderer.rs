use std::io::{self, Write};

use chrono::Local;

use crate::models::{ConversationState, Message};

pub const TITLE: &str = "Travel Assistant";
pub const THINKING: &str = "Assistant is thinking…";

/// Writes the conversation to a terminal-like sink.
///
/// Tracks how much of the log it has already printed so that feeding it
/// successive [`ConversationState`]s prints each message exactly once.
pub struct TranscriptRenderer<W> {
    out: W,
    rendered: usize,
    showed_pending: bool,
}

impl<W: Write> TranscriptRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, rendered: 0, showed_pending: false }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "── {TITLE} ──")?;
        writeln!(self.out, "Type a message and press Enter. /help lists commands.")?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Prints messages appended since the last call, plus a thinking line
    /// once per pending period.
    pub fn render_state(&mut self, state: &ConversationState) -> io::Result<()> {
        for message in state.messages.iter().skip(self.rendered) {
            write_message(&mut self.out, message, false)?;
        }
        self.rendered = self.rendered.max(state.messages.len());

        if state.pending && !self.showed_pending {
            writeln!(self.out, "{THINKING}")?;
        }
        self.showed_pending = state.pending;
        self.out.flush()
    }

    /// Prints the whole log regardless of what was shown before, each message
    /// stamped with the local time it was appended.
    pub fn render_history(&mut self, messages: &[Message]) -> io::Result<()> {
        if messages.is_empty() {
            writeln!(self.out, "(no messages yet)")?;
        }
        for message in messages {
            write_message(&mut self.out, message, true)?;
        }
        self.rendered = self.rendered.max(messages.len());
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_message(out: &mut impl Write, message: &Message, with_time: bool) -> io::Result<()> {
    let label = message.role.label();
    let head = if with_time {
        let time = message.created_at.with_timezone(&Local).format("%H:%M:%S");
        format!("[{time}] {label}: ")
    } else {
        format!("{label}: ")
    };
    let mut lines = message.content.lines();
    writeln!(out, "{head}{}", lines.next().unwrap_or_default())?;
    let indent = " ".repeat(head.chars().count());
    for line in lines {
        writeln!(out, "{indent}{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: TranscriptRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn prints_each_message_once() {
        let mut renderer = TranscriptRenderer::new(Vec::new());
        let mut state = ConversationState::default();

        state.pending = true;
        state.messages.push(Message::user("Hello"));
        renderer.render_state(&state).unwrap();
        renderer.render_state(&state).unwrap();

        state.messages.push(Message::assistant("Hi there"));
        state.pending = false;
        renderer.render_state(&state).unwrap();

        assert_eq!(rendered(renderer), format!("You: Hello\n{THINKING}\nAssistant: Hi there\n"));
    }

    #[test]
    fn multiline_content_is_indented() {
        let mut renderer = TranscriptRenderer::new(Vec::new());
        let state = ConversationState {
            messages: vec![Message::assistant("Flights:\nLX 318\nLX 320")],
            pending: false,
        };
        renderer.render_state(&state).unwrap();
        assert_eq!(
            rendered(renderer),
            "Assistant: Flights:\n           LX 318\n           LX 320\n"
        );
    }

    #[test]
    fn history_of_empty_log() {
        let mut renderer = TranscriptRenderer::new(Vec::new());
        renderer.render_history(&[]).unwrap();
        assert_eq!(rendered(renderer), "(no messages yet)\n");
    }

    #[test]
    fn empty_content_still_gets_a_label() {
        let mut renderer = TranscriptRenderer::new(Vec::new());
        let state = ConversationState {
            messages: vec![Message::assistant("")],
            pending: false,
        };
        renderer.render_state(&state).unwrap();
        assert_eq!(rendered(renderer), "Assistant: \n");
    }

    #[test]
    fn history_stamps_each_message_with_its_time() {
        let hello = Message::user("Hello");
        let reply = Message::assistant("Hi there\nHow can I help?");
        let stamp = |m: &Message| m.created_at.with_timezone(&Local).format("%H:%M:%S").to_string();
        let expected = format!(
            "[{}] You: Hello\n[{}] Assistant: Hi there\n{}How can I help?\n",
            stamp(&hello),
            stamp(&reply),
            " ".repeat("[00:00:00] Assistant: ".len()),
        );

        let mut renderer = TranscriptRenderer::new(Vec::new());
        renderer.render_history(&[hello, reply]).unwrap();

        assert_eq!(rendered(renderer), expected);
    }
}
