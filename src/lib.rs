pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::clock::{FixedClock, SystemClock};
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{age::age, engine::AgeEngine, CalendarDate, Clock};
pub use crate::utils::error::{AgeError, Result};
