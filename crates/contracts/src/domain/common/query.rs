//! Предикаты `skip_serializing_if` для параметров строки запроса.
//!
//! Параметр попадает в URL только если фильтр задан: `None`, пустая строка
//! и нулевой идентификатор считаются "не задано".

use super::EntityId;

/// Строка не задана или состоит только из пробелов
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Идентификатор не задан или равен нулю
pub fn is_unset_id(value: &Option<EntityId>) -> bool {
    value.map_or(true, |id| id == 0)
}

/// Приводит пустую строку к `None` (для полей форм)
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Значение `<select>` со ссылкой на сущность: пустая строка и `0` означают "не выбрано"
pub fn parse_id_option(value: &str) -> Option<EntityId> {
    value.trim().parse::<EntityId>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some(String::new())));
        assert!(is_blank(&Some("   ".to_string())));
        assert!(!is_blank(&Some("R16".to_string())));
    }

    #[test]
    fn test_is_unset_id() {
        assert!(is_unset_id(&None));
        assert!(is_unset_id(&Some(0)));
        assert!(!is_unset_id(&Some(5)));
    }

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank("  Fransiya "), Some("Fransiya".to_string()));
        assert_eq!(non_blank(" "), None);
    }

    #[test]
    fn test_parse_id_option() {
        assert_eq!(parse_id_option(""), None);
        assert_eq!(parse_id_option("0"), None);
        assert_eq!(parse_id_option("-4"), None);
        assert_eq!(parse_id_option("12"), Some(12));
    }
}
