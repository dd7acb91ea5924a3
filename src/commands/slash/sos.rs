//! SOS slash command

use crate::commands::schema::CommandSchema;

/// Creates the sos command
pub fn create_command() -> CommandSchema {
    CommandSchema::new("sos", "Calls SOS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos_command_has_no_options() {
        let command = create_command();
        assert_eq!(command.name, "sos");
        assert!(command.options.is_empty());
    }
}
