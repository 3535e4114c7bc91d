//! Structured command line parsing.
//!
//! Converts the raw command buffer (always beginning with ':') into a
//! `ParsedCommand`. No side-effects here; pure classification. Unknown input
//! is carried back so the caller can echo it in the status line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    Quit,
    ForceQuit,
    WriteQuit,
    /// Bare ':' followed by Enter.
    Empty,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let s = raw.trim();
        let Some(body) = s.strip_prefix(':') else {
            return ParsedCommand::Unknown(s.to_string());
        };
        match body.trim() {
            "" => ParsedCommand::Empty,
            "w" => ParsedCommand::Write,
            "q" => ParsedCommand::Quit,
            "q!" => ParsedCommand::ForceQuit,
            "wq" => ParsedCommand::WriteQuit,
            other => ParsedCommand::Unknown(other.to_string()),
        }
    }
}
