//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use irpanel_domain::ir_command::IrCommand;

use crate::config::DEFAULT_PATH;

/// Query the room temperature and send air-conditioner IR commands through
/// the device's CGI endpoints.
#[derive(Debug, Parser)]
#[command(name = "irpanel", version)]
pub struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", env = "IRPANEL_CONFIG", default_value = DEFAULT_PATH)]
    pub config: PathBuf,

    /// Device base URL, overriding configuration and environment.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Action to run. Without one, behaves like opening the panel: the
    /// temperature is fetched once.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current temperature.
    Temp,
    /// Send an IR command built from `NAME=VALUE` fields, in order.
    Ir {
        #[arg(value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

impl Cli {
    /// The IR form contents given on the command line (empty for other actions).
    #[must_use]
    pub fn ir_form(&self) -> IrCommand {
        match &self.command {
            Some(Command::Ir { fields }) => fields.iter().cloned().collect(),
            _ => IrCommand::new(),
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("empty field name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}
