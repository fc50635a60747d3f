use crate::domain::model::Limits;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub limits: LimitsConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_students: Option<usize>,
    pub max_courses: Option<usize>,
    pub max_enrollment_per_course: Option<usize>,
    pub max_courses_per_student: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl RegistryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_STUDENTS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 未設定的上限使用預設值
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_students: self.limits.max_students.unwrap_or(defaults.max_students),
            max_courses: self.limits.max_courses.unwrap_or(defaults.max_courses),
            max_enrollment_per_course: self
                .limits
                .max_enrollment_per_course
                .unwrap_or(defaults.max_enrollment_per_course),
            max_courses_per_student: self
                .limits
                .max_courses_per_student
                .unwrap_or(defaults.max_courses_per_student),
        }
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for Limits {
    fn validate(&self) -> Result<()> {
        validate_positive_number("limits.max_students", self.max_students, 1)?;
        validate_positive_number("limits.max_courses", self.max_courses, 1)?;
        validate_positive_number(
            "limits.max_enrollment_per_course",
            self.max_enrollment_per_course,
            1,
        )?;
        validate_positive_number(
            "limits.max_courses_per_student",
            self.max_courses_per_student,
            1,
        )?;
        Ok(())
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        self.limits().validate()?;

        if let Some(level) = self.log_level() {
            let valid_levels = ["error", "warn", "info", "debug", "trace"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(RegistryError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}
