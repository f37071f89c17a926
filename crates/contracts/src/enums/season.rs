use serde::{Deserialize, Serialize};

/// Сезонность шин
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Summer,
    Winter,
    AllSeason,
}

impl Season {
    /// Код сезона, как его принимает API
    pub fn code(&self) -> &'static str {
        match self {
            Season::Summer => "SUMMER",
            Season::Winter => "WINTER",
            Season::AllSeason => "ALL_SEASON",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Summer => "Летние",
            Season::Winter => "Зимние",
            Season::AllSeason => "Всесезонные",
        }
    }

    pub fn all() -> [Season; 3] {
        [Season::Summer, Season::Winter, Season::AllSeason]
    }

    /// Парсинг из строки; пустая строка означает "без фильтра"
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SUMMER" => Some(Season::Summer),
            "WINTER" => Some(Season::Winter),
            "ALL_SEASON" => Some(Season::AllSeason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_through_from_code() {
        for season in Season::all() {
            assert_eq!(Season::from_code(season.code()), Some(season));
        }
        assert_eq!(Season::from_code(""), None);
    }

    #[test]
    fn test_serializes_as_api_code() {
        assert_eq!(
            serde_json::to_string(&Season::AllSeason).unwrap(),
            "\"ALL_SEASON\""
        );
    }
}
