/// A recognized prefix command, resolved once per incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!analyse <url or topic>` - website analysis via the text model.
    Analyse { args: String },
    /// `!vision` - describe the message's first image attachment.
    Vision,
    /// `!answer ...` - forward the full message text to the text model.
    Answer { prompt: String },
}

impl Command {
    /// Match a message against the known prefixes, first match wins.
    /// Returns `None` for anything that is not a command.
    #[must_use]
    pub fn parse(content: &str) -> Option<Command> {
        if let Some(rest) = content.strip_prefix("!analyse") {
            Some(Command::Analyse {
                args: rest.trim().to_string(),
            })
        } else if content.starts_with("!vision") {
            Some(Command::Vision)
        } else if content.starts_with("!answer") {
            Some(Command::Answer {
                prompt: content.to_string(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(Command::parse("hello there").is_none());
        assert!(Command::parse("").is_none());
        assert!(Command::parse("!unknown").is_none());
    }

    #[test]
    fn prefix_must_lead_the_message() {
        assert!(Command::parse("please !answer me").is_none());
    }

    #[test]
    fn analyse_captures_trailing_args() {
        let command = Command::parse("!analyse one two").expect("expected command");
        assert_eq!(
            command,
            Command::Analyse {
                args: "one two".to_string()
            }
        );
    }

    #[test]
    fn analyse_without_args_yields_empty_string() {
        let command = Command::parse("!analyse").expect("expected command");
        assert_eq!(
            command,
            Command::Analyse {
                args: String::new()
            }
        );
    }

    #[test]
    fn vision_ignores_trailing_text() {
        assert_eq!(
            Command::parse("!vision describe this"),
            Some(Command::Vision)
        );
    }

    #[test]
    fn answer_keeps_the_full_message_text() {
        let command = Command::parse("!answer what is Rust?").expect("expected command");
        assert_eq!(
            command,
            Command::Answer {
                prompt: "!answer what is Rust?".to_string()
            }
        );
    }

    #[test]
    fn analyse_is_checked_before_answer() {
        // A message can only ever fire one handler; listed order decides.
        let command = Command::parse("!analyse !answer").expect("expected command");
        assert!(matches!(command, Command::Analyse { .. }));
    }
}
