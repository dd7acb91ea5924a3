//! Player slash commands: /player get, /player remove

use crate::commands::schema::{CommandOption, CommandOptionType, CommandSchema};

/// Creates the player command with its sub-commands
pub fn create_command() -> CommandSchema {
    CommandSchema::new("player", "Commands related to players")
        .option(get_sub_command())
        .option(remove_sub_command())
        .option(test_group())
}

fn get_sub_command() -> CommandOption {
    CommandOption::new(
        CommandOptionType::SubCommand,
        "get",
        "Get information about a player",
    )
    .option(
        CommandOption::new(CommandOptionType::User, "user", "Which player do you want?")
            .required(),
    )
}

fn remove_sub_command() -> CommandOption {
    CommandOption::new(CommandOptionType::SubCommand, "remove", "Remove a player").option(
        CommandOption::new(CommandOptionType::User, "user", "Which player do you want?")
            .required(),
    )
}

/// Sub-command group exercising nested dispatch paths.
fn test_group() -> CommandOption {
    CommandOption::new(CommandOptionType::SubCommandGroup, "test", "Test").option(get_sub_command())
}
