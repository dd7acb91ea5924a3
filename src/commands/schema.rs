//! Slash command schema types
//!
//! Static, serializable descriptions of commands and their option trees,
//! sent to the platform's command-registration endpoint. Construction is
//! pure and cannot fail; malformed nesting is a programming error caught
//! by debug assertions and tests.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Debug-assert nesting rules at construction
//! - 1.0.0: Initial schema and option types

use serde::{Deserialize, Serialize};

/// Option type markers, serialized as their platform wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl CommandOptionType {
    /// Whether `child` may be nested under an option of this type.
    ///
    /// Groups hold only sub-commands or further groups; sub-commands hold
    /// only leaf value types; leaf types never nest.
    pub fn allows_child(self, child: CommandOptionType) -> bool {
        match self {
            CommandOptionType::SubCommandGroup => matches!(
                child,
                CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup
            ),
            CommandOptionType::SubCommand => !matches!(
                child,
                CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup
            ),
            _ => false,
        }
    }
}

impl From<CommandOptionType> for u8 {
    fn from(kind: CommandOptionType) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for CommandOptionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CommandOptionType::SubCommand),
            2 => Ok(CommandOptionType::SubCommandGroup),
            3 => Ok(CommandOptionType::String),
            4 => Ok(CommandOptionType::Integer),
            5 => Ok(CommandOptionType::Boolean),
            6 => Ok(CommandOptionType::User),
            7 => Ok(CommandOptionType::Channel),
            8 => Ok(CommandOptionType::Role),
            9 => Ok(CommandOptionType::Mentionable),
            10 => Ok(CommandOptionType::Number),
            11 => Ok(CommandOptionType::Attachment),
            other => Err(format!("unknown command option type {other}")),
        }
    }
}

/// A top-level command definition.
///
/// Built once at startup, uploaded to the registration endpoint, then
/// discarded.
#[derive(Debug, Clone, Serialize)]
pub struct CommandSchema {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Append an option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

/// One node of a command's option tree.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CommandOption {
    pub fn new(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            options: Vec::new(),
        }
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Append a nested option.
    pub fn option(mut self, option: CommandOption) -> Self {
        debug_assert!(
            self.kind.allows_child(option.kind),
            "option '{}' ({:?}) cannot nest under '{}' ({:?})",
            option.name,
            option.kind,
            self.name,
            self.kind,
        );
        self.options.push(option);
        self
    }
}
