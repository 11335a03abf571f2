//! Air-conditioner form state.

use irpanel_app::ports::IrForm;
use irpanel_domain::ir_command::IrCommand;
use leptos::prelude::*;

pub const POWER_OPTIONS: &[&str] = &["on", "off"];
pub const MODE_OPTIONS: &[&str] = &["auto", "cool", "heat", "dry", "fan"];
pub const FAN_OPTIONS: &[&str] = &["auto", "1", "2", "3"];
pub const MIN_TEMP: u8 = 16;
pub const MAX_TEMP: u8 = 30;

/// Reactive values of the aircon form fields.
#[derive(Debug, Clone, Copy)]
pub struct AirconForm {
    pub power: RwSignal<String>,
    pub mode: RwSignal<String>,
    pub temp: RwSignal<String>,
    pub fan: RwSignal<String>,
}

impl Default for AirconForm {
    fn default() -> Self {
        Self {
            power: RwSignal::new("on".to_string()),
            mode: RwSignal::new("cool".to_string()),
            temp: RwSignal::new("24".to_string()),
            fan: RwSignal::new("auto".to_string()),
        }
    }
}

impl IrForm for AirconForm {
    fn snapshot(&self) -> IrCommand {
        aircon_command(
            &self.power.get_untracked(),
            &self.mode.get_untracked(),
            &self.temp.get_untracked(),
            &self.fan.get_untracked(),
        )
    }
}

/// Fields in the order they appear on the page.
#[must_use]
pub fn aircon_command(power: &str, mode: &str, temp: &str, fan: &str) -> IrCommand {
    IrCommand::new()
        .with("power", power)
        .with("mode", mode)
        .with("temp", temp)
        .with("fan", fan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_fields_in_page_order() {
        let cmd = aircon_command("on", "cool", "24", "auto");
        assert_eq!(cmd.to_query(), "power=on&mode=cool&temp=24&fan=auto");
    }

    #[test]
    fn should_pass_values_through_unvalidated() {
        let cmd = aircon_command("off", "turbo", "99", "");
        assert_eq!(cmd.get("temp"), Some("99"));
        assert_eq!(cmd.get("fan"), Some(""));
    }
}
