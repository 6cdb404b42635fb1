use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Slash commands available from the chat input line
#[derive(Debug, Clone, PartialEq, EnumString, EnumIter, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum SlashCommand {
    /// Show available commands and help
    Help,
    /// Exit the application
    Quit,
    /// Clear the transcript and start a new session
    Clear,
    /// Upload a document for indexing
    Upload,
    /// Switch to the documents screen
    Documents,
    /// Switch to the dashboard screen
    Dashboard,
}

impl SlashCommand {
    /// Get user-friendly description for the command
    pub fn description(&self) -> &'static str {
        match self {
            Self::Help => "Show available commands and usage information",
            Self::Quit => "Exit the application",
            Self::Clear => "Clear the chat and start a fresh session",
            Self::Upload => "Upload a PDF or DOCX document for indexing",
            Self::Documents => "Switch to the documents screen",
            Self::Dashboard => "Switch to the dashboard screen",
        }
    }

    /// Get usage example for the command
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::Quit => "/quit",
            Self::Clear => "/clear",
            Self::Upload => "/upload <path>",
            Self::Documents => "/documents",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Check if the command requires an argument
    pub fn requires_args(&self) -> bool {
        matches!(self, Self::Upload)
    }

    /// Get all built-in slash commands for help display
    pub fn built_in_commands() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Parse command from input string, extracting command and argument.
    ///
    /// `/upload` takes the rest of the line as a single path so paths with
    /// spaces survive; every other command rejects trailing text.
    pub fn parse_from_input(input: &str) -> Result<(Self, Option<String>), String> {
        let trimmed = input.trim();

        let without_slash = trimmed
            .strip_prefix('/')
            .ok_or_else(|| "Input must start with '/'".to_string())?;

        if without_slash.is_empty() {
            return Err("Empty command".to_string());
        }

        let (command_str, rest) = match without_slash.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (without_slash, ""),
        };

        let command =
            Self::try_from(command_str).map_err(|_| format!("Unknown command: /{}", command_str))?;

        match (&command, rest.is_empty()) {
            (Self::Upload, true) => Err(format!("Usage: {}", command.usage())),
            (Self::Upload, false) => Ok((command, Some(rest.to_string()))),
            (_, false) => Err(format!(
                "Command /{} does not accept arguments",
                command.as_ref()
            )),
            (_, true) => Ok((command, None)),
        }
    }

    /// Get the command name as it appears after the slash
    pub fn command_name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing_valid() {
        let (cmd, arg) = SlashCommand::parse_from_input("/help").unwrap();
        assert_eq!(cmd, SlashCommand::Help);
        assert!(arg.is_none());

        let (cmd, arg) = SlashCommand::parse_from_input("/upload /tmp/policy.pdf").unwrap();
        assert_eq!(cmd, SlashCommand::Upload);
        assert_eq!(arg.as_deref(), Some("/tmp/policy.pdf"));

        let (cmd, arg) = SlashCommand::parse_from_input("/upload /tmp/loss runs.docx").unwrap();
        assert_eq!(cmd, SlashCommand::Upload);
        assert_eq!(arg.as_deref(), Some("/tmp/loss runs.docx"));
    }

    #[test]
    fn test_command_parsing_errors() {
        assert!(SlashCommand::parse_from_input("help").is_err()); // No slash
        assert!(SlashCommand::parse_from_input("/").is_err()); // Empty command
        assert!(SlashCommand::parse_from_input("/unknown").is_err()); // Unknown command
        assert!(SlashCommand::parse_from_input("/upload").is_err()); // Missing required arg
        assert!(SlashCommand::parse_from_input("/help extra").is_err()); // Unexpected args
    }

    #[test]
    fn test_command_metadata() {
        let help = SlashCommand::Help;
        assert_eq!(help.usage(), "/help");
        assert!(!help.requires_args());
        assert!(!help.description().is_empty());

        let upload = SlashCommand::Upload;
        assert_eq!(upload.usage(), "/upload <path>");
        assert!(upload.requires_args());
    }

    #[test]
    fn test_built_in_commands() {
        let commands = SlashCommand::built_in_commands();
        assert!(commands.contains(&SlashCommand::Help));
        assert!(commands.contains(&SlashCommand::Upload));
        assert!(commands.contains(&SlashCommand::Clear));
    }

    #[test]
    fn test_enum_string_conversion() {
        assert_eq!("help", SlashCommand::Help.as_ref());
        assert_eq!("documents", SlashCommand::Documents.as_ref());

        assert_eq!(Ok(SlashCommand::Upload), "upload".parse());
        assert_eq!(Ok(SlashCommand::Dashboard), "dashboard".parse());
    }
}
