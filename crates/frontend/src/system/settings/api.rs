use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, finish_json, get_data, read_data, send};
use contracts::system::settings::AppSettings;
use gloo_net::http::Request;

pub const SETTINGS_PATH: &str = "/settings";

pub async fn fetch_settings() -> Result<AppSettings, ApiError> {
    get_data(SETTINGS_PATH).await
}

/// Сохранить настройки; возвращает значение, подтверждённое сервером
pub async fn update_settings(settings: &AppSettings) -> Result<AppSettings, ApiError> {
    let request = finish_json(Request::put(&api_url(SETTINGS_PATH)), settings)?;
    read_data(send(request).await?).await
}
