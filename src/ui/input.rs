/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text to send to the assistant.
    Send(String),
    /// Print the whole transcript again.
    History,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: /history re-prints the conversation, /help shows this, /quit exits.\n\
                             Anything else is sent to the assistant.";

/// Parses one input line. Blank lines yield `None` and are never sent.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let command = match trimmed {
        "/quit" | "/exit" => Command::Quit,
        "/history" => Command::History,
        "/help" => Command::Help,
        _ => Command::Send(trimmed.to_string()),
    };
    Some(command)
}
