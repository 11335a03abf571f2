//! CGI endpoints exposed by the device.
//!
//! Paths are relative to the device root so the browser resolves them
//! against the page URL and the native gateway against its base URL.

use crate::ir_command::IrCommand;

/// Returns the current temperature reading.
pub const TEMPERATURE_PATH: &str = "temp";

/// Emits an air-conditioner IR command described by the query string.
pub const AIRCON_IR_PATH: &str = "ir/aircon";

/// Request target for an IR command.
///
/// The `?` is always present, even for an empty command.
#[must_use]
pub fn ir_command_target(command: &IrCommand) -> String {
    format!("{AIRCON_IR_PATH}?{}", command.to_query())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_append_query_to_aircon_path() {
        let cmd = IrCommand::new().with("power", "on").with("temp", "24");
        assert_eq!(ir_command_target(&cmd), "ir/aircon?power=on&temp=24");
    }

    #[test]
    fn should_keep_separator_for_empty_command() {
        assert_eq!(ir_command_target(&IrCommand::new()), "ir/aircon?");
    }
}
