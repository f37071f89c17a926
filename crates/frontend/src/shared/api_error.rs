//! Ошибка обращения к API.
//!
//! Одна ошибка на все клиенты: страницы различают только "успех" и "неуспех",
//! а текст ошибки уходит в лог или в уведомление.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера
    #[error("Failed to send request: {0}")]
    Network(String),

    /// Сервер ответил кодом вне диапазона 2xx
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Тело ответа не соответствует ожидаемому формату
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Не удалось сериализовать параметры или тело запроса
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// Ошибка браузерного API (Blob, URL, DOM)
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }
}

impl From<serde_qs::Error> for ApiError {
    fn from(e: serde_qs::Error) -> Self {
        ApiError::Encode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ApiError::http(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert!(matches!(ApiError::http(404, ""), ApiError::Http { status: 404, .. }));
    }
}
