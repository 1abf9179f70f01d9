use crate::core::CalendarDate;
use crate::utils::error::{AgeError, Result};
use crate::utils::logger::parse_directive;
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub clock: Option<ClockConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Fixed reference date, `YYYY-MM-DD`.
    pub today: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `age_calc=debug`.
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AgeError::ConfigValidationError {
            field: path.as_ref().display().to_string(),
            message: format!("cannot read file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AgeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AGE_CALC_TODAY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = env_var_pattern();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn fixed_today(&self) -> Result<Option<CalendarDate>> {
        self.clock
            .as_ref()
            .and_then(|c| c.today.as_deref())
            .map(str::parse::<CalendarDate>)
            .transpose()
            .map_err(|e| match e {
                AgeError::InvalidConfigValueError { value, reason, .. } => {
                    AgeError::InvalidConfigValueError {
                        field: "clock.today".to_string(),
                        value,
                        reason,
                    }
                }
                other => other,
            })
    }

    pub fn log_directive(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

fn env_var_pattern() -> Regex {
    // constant pattern, always compiles
    Regex::new(r"\$\{([^}]+)\}").unwrap()
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.fixed_today()?;
        if let Some(level) = self.log_directive() {
            validate_non_empty_string("logging.level", level)?;
            parse_directive(level).map_err(|reason| AgeError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: level.to_string(),
                reason,
            })?;
        }
        Ok(())
    }
}
