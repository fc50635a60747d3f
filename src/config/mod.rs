pub mod toml_config;

pub use toml_config::{LimitsConfig, LogFormat, LoggingConfig, RegistryConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-registry")]
#[command(about = "Interactive university course registration")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(long)]
    pub max_students: Option<usize>,

    #[arg(long)]
    pub max_courses: Option<usize>,

    #[arg(long = "max-enrollment")]
    pub max_enrollment_per_course: Option<usize>,

    #[arg(long)]
    pub max_courses_per_student: Option<usize>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔（若有），再套用命令列覆蓋值
    pub fn load(&self) -> Result<RegistryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                RegistryConfig::from_file(path)?
            }
            None => RegistryConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut RegistryConfig) {
        let limits = &mut config.limits;
        if let Some(value) = self.max_students {
            limits.max_students = Some(value);
        }
        if let Some(value) = self.max_courses {
            limits.max_courses = Some(value);
        }
        if let Some(value) = self.max_enrollment_per_course {
            limits.max_enrollment_per_course = Some(value);
        }
        if let Some(value) = self.max_courses_per_student {
            limits.max_courses_per_student = Some(value);
        }

        if let Some(format) = self.log_format {
            config
                .logging
                .get_or_insert(LoggingConfig {
                    level: None,
                    format: None,
                })
                .format = Some(format);
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::model::Limits;

    #[test]
    fn test_flags_override_file_values() {
        let mut config = RegistryConfig::from_toml_str(
            "[limits]\nmax_students = 20\nmax_courses = 8\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from([
            "course-registry",
            "--max-students",
            "3",
            "--max-enrollment",
            "2",
            "--log-format",
            "json",
        ]);

        cli.apply_overrides(&mut config);
        let limits = config.limits();

        assert_eq!(limits.max_students, 3);
        assert_eq!(limits.max_courses, 8);
        assert_eq!(limits.max_enrollment_per_course, 2);
        assert_eq!(
            limits.max_courses_per_student,
            Limits::DEFAULT_MAX_COURSES_PER_STUDENT
        );
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let cli = CliConfig::parse_from(["course-registry"]);
        let config = cli.load().unwrap();

        assert_eq!(config.limits(), Limits::default());
        assert!(!cli.verbose);
    }
}
