use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Student ID '{id}' must be unique")]
    DuplicateId { id: String },

    #[error("Course code '{code}' must be unique")]
    DuplicateCode { code: String },

    #[error("Max number of {entity} reached ({limit})")]
    CapacityExceeded { entity: String, limit: usize },

    #[error("{kind} '{key}' not found")]
    NotFound { kind: String, key: String },

    #[error("Student '{student_id}' is already registered in course '{course_code}'")]
    AlreadyRegistered {
        student_id: String,
        course_code: String,
    },

    #[error("Course '{course_code}' is full ({limit} students)")]
    CourseFull { course_code: String, limit: usize },

    #[error("Student '{student_id}' already has the maximum of {limit} courses")]
    StudentCourseLimitReached { student_id: String, limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Conflict,
    Capacity,
    Lookup,
    Config,
    Io,
}

impl RegistryError {
    pub fn not_found_student(id: &str) -> Self {
        Self::NotFound {
            kind: "Student".to_string(),
            key: id.to_string(),
        }
    }

    pub fn not_found_course(code: &str) -> Self {
        Self::NotFound {
            kind: "Course".to_string(),
            key: code.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::DuplicateId { .. }
            | Self::DuplicateCode { .. }
            | Self::AlreadyRegistered { .. } => ErrorCategory::Conflict,
            Self::CapacityExceeded { .. }
            | Self::CourseFull { .. }
            | Self::StudentCourseLimitReached { .. } => ErrorCategory::Capacity,
            Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            Self::IoError(_) => ErrorCategory::Io,
        }
    }

    /// 給使用者的下一步建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Check the value and try again",
            Self::DuplicateId { .. } => "Choose a student ID that is not in use",
            Self::DuplicateCode { .. } => "Choose a course code that is not in use",
            Self::CapacityExceeded { .. } => "Delete an existing entry or raise the limit in the config",
            Self::NotFound { .. } => "Use an exact student ID or course code",
            Self::AlreadyRegistered { .. } => "No action needed, the registration already exists",
            Self::CourseFull { .. } => "Pick another course or unregister a student first",
            Self::StudentCourseLimitReached { .. } => "Unregister the student from another course first",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
