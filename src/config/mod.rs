pub mod clock;
pub mod toml_config;

use crate::config::clock::{FixedClock, SystemClock};
use crate::config::toml_config::TomlConfig;
use crate::core::{CalendarDate, Clock};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "age-calc")]
#[command(about = "Prompts for a birth date and prints the age in completed years")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use this date (YYYY-MM-DD) instead of the system clock
    #[arg(long, value_parser = parse_today)]
    pub today: Option<CalendarDate>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_today(value: &str) -> std::result::Result<CalendarDate, String> {
    value.parse().map_err(|e: crate::utils::error::AgeError| e.to_string())
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_deref().map(TomlConfig::from_file).transpose()
    }

    /// `--today` beats `[clock] today`, which beats the system clock.
    pub fn reference_date(&self, file: Option<&TomlConfig>) -> Result<Option<CalendarDate>> {
        if let Some(today) = self.today {
            return Ok(Some(today));
        }
        match file {
            Some(file) => file.fixed_today(),
            None => Ok(None),
        }
    }

    pub fn clock(&self, file: Option<&TomlConfig>) -> Result<Box<dyn Clock>> {
        Ok(match self.reference_date(file)? {
            Some(today) => Box::new(FixedClock::new(today)),
            None => Box::new(SystemClock),
        })
    }
}
