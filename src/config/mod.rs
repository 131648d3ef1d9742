pub mod toml_config;

use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "cli")]
use clap::Parser;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// One region of the console showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Speakers,
    Venues,
    Events,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Speakers, Section::Venues, Section::Events];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Speakers => "speakers",
            Section::Venues => "venues",
            Section::Events => "events",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidConfigValueError {
                field: "showcase.sections".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown section. Valid sections: {}",
                    Section::ALL.map(|section| section.as_str()).join(", ")
                ),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "event-management")]
#[command(about = "Console showcase for the Speaker, Venue and Event entities")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Regions to run (default: all)
    #[arg(long = "section", value_enum, value_delimiter = ',')]
    pub sections: Vec<Section>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags given on the command line win over the file.
    pub fn apply_overrides(&self, config: &mut toml_config::ShowcaseConfig) {
        if !self.sections.is_empty() {
            config.showcase.sections = self.sections.iter().map(|s| s.to_string()).collect();
        }
        if self.json_logs {
            config.logging.get_or_insert_with(Default::default).format = Some(LogFormat::Json);
        }
    }
}
