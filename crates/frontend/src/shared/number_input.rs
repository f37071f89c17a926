//! Разбор значения числового поля ввода.
//!
//! Поле хранит черновик текста отдельно от числа: пока пользователь набирает
//! `-` или `.`, число не меняется. Значение фиксируется только когда текст
//! разбирается как конечное число.

/// Что пришло из поля ввода
#[derive(Debug, Clone, PartialEq)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// Промежуточные состояния набора, которые не фиксируют значение
const TRANSIENT_INPUTS: [&str; 4] = ["", "-", ".", "-."];

impl RawNumber {
    /// Значение для фиксации или `None`, если фиксировать нечего
    pub fn commit(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) if n.is_finite() => Some(*n),
            RawNumber::Number(_) => None,
            RawNumber::Text(text) => parse_committed(text),
        }
    }

    /// Целое значение в границах `[min, max]`: дробная часть отбрасывается
    pub fn commit_clamped(&self, min: i32, max: i32) -> Option<i32> {
        self.commit()
            .map(|n| (n.trunc() as i64).clamp(min as i64, max as i64) as i32)
    }

    /// Текст находится в промежуточном состоянии набора
    pub fn is_transient(&self) -> bool {
        matches!(self, RawNumber::Text(t) if TRANSIENT_INPUTS.contains(&t.trim()))
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

fn parse_committed(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if TRANSIENT_INPUTS.contains(&trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_inputs_do_not_commit() {
        for text in ["", "-", ".", "-."] {
            let raw = RawNumber::from(text.to_string());
            assert!(raw.is_transient(), "{text:?} must be transient");
            assert_eq!(raw.commit(), None, "{text:?} must not commit");
        }
    }

    #[test]
    fn test_numeric_strings_commit_immediately() {
        assert_eq!(RawNumber::from("45".to_string()).commit(), Some(45.0));
        assert_eq!(RawNumber::from("-3".to_string()).commit(), Some(-3.0));
        assert_eq!(RawNumber::from(".5".to_string()).commit(), Some(0.5));
        assert_eq!(RawNumber::from(" 90 ".to_string()).commit(), Some(90.0));
    }

    #[test]
    fn test_garbage_does_not_commit() {
        assert_eq!(RawNumber::from("abc".to_string()).commit(), None);
        assert_eq!(RawNumber::from("12abc".to_string()).commit(), None);
        assert_eq!(RawNumber::from("inf".to_string()).commit(), None);
        assert!(!RawNumber::from("abc".to_string()).is_transient());
    }

    #[test]
    fn test_raw_numbers_commit_when_finite() {
        assert_eq!(RawNumber::from(30.0).commit(), Some(30.0));
        assert_eq!(RawNumber::from(f64::NAN).commit(), None);
    }

    #[test]
    fn test_commit_clamped_to_day_range() {
        let days = |text: &str| RawNumber::from(text.to_string()).commit_clamped(1, 365);
        assert_eq!(days("0"), Some(1));
        assert_eq!(days("400"), Some(365));
        assert_eq!(days("45.9"), Some(45));
        assert_eq!(days("-"), None);
        assert_eq!(days(""), None);
    }
}
