use serde::{Deserialize, Serialize};

/// Минимальный срок погашения долга, дней
pub const DEBT_DUE_DAYS_MIN: i32 = 1;
/// Максимальный срок погашения долга, дней
pub const DEBT_DUE_DAYS_MAX: i32 = 365;
pub const DEBT_DUE_DAYS_DEFAULT: i32 = 30;

/// Настройки приложения (единственная запись)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_debt_due_days")]
    pub debt_due_days: i32,
}

fn default_debt_due_days() -> i32 {
    DEBT_DUE_DAYS_DEFAULT
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            debt_due_days: DEBT_DUE_DAYS_DEFAULT,
        }
    }
}

/// Приводит введённое значение к целому числу дней в допустимых границах
pub fn clamp_debt_due_days(value: f64) -> i32 {
    if value.is_nan() {
        return DEBT_DUE_DAYS_MIN;
    }
    let days = value.trunc();
    if days < DEBT_DUE_DAYS_MIN as f64 {
        DEBT_DUE_DAYS_MIN
    } else if days > DEBT_DUE_DAYS_MAX as f64 {
        DEBT_DUE_DAYS_MAX
    } else {
        days as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_thirty_days() {
        assert_eq!(AppSettings::default().debt_due_days, 30);
        let parsed: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.debt_due_days, 30);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&AppSettings { debt_due_days: 45 }).unwrap();
        assert_eq!(json, r#"{"debtDueDays":45}"#);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_debt_due_days(0.0), 1);
        assert_eq!(clamp_debt_due_days(-12.0), 1);
        assert_eq!(clamp_debt_due_days(400.0), 365);
        assert_eq!(clamp_debt_due_days(45.9), 45);
        assert_eq!(clamp_debt_due_days(f64::NAN), 1);
    }
}
