use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 日期格式 MM-DD-YYYY：只檢查長度、分隔符號與數字，不檢查月份/日期範圍
pub fn validate_date(field_name: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| RegistryError::InvalidInput {
        field: field_name.to_string(),
        reason: reason.to_string(),
    };

    if value.len() != 10 {
        return Err(invalid("date must be in MM-DD-YYYY format"));
    }

    let bytes = value.as_bytes();
    if bytes[2] != b'-' || bytes[5] != b'-' {
        return Err(invalid("date must use '-' as separator (MM-DD-YYYY)"));
    }

    // Non-ASCII input makes get() return None on a char boundary
    let parts = [value.get(0..2), value.get(3..5), value.get(6..10)];
    for part in parts {
        match part {
            Some(digits) if digits.parse::<i32>().is_ok() => {}
            _ => return Err(invalid("month, day and year must be numbers")),
        }
    }

    Ok(())
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RegistryError::InvalidInput {
            field: field_name.to_string(),
            reason: "can not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
