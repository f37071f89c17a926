/// Выгрузка списков в Excel/PDF через серверный эндпоинт `{resource}/export`
use super::api_error::ApiError;
use super::api_utils::{api_url, build_query, finish, join_queries, send, with_query};
use contracts::enums::ExportFormat;
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Экспорт одного ресурса; создаётся клиентом ресурса по его базовому пути
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportApi {
    base_path: &'static str,
    resource: &'static str,
}

#[derive(Serialize)]
struct FormatParam {
    format: ExportFormat,
}

impl ExportApi {
    /// `base_path` без префикса версии, например `"/brands"`
    pub const fn new(base_path: &'static str, resource: &'static str) -> Self {
        Self {
            base_path,
            resource,
        }
    }

    pub fn base_path(&self) -> &'static str {
        self.base_path
    }

    /// Путь запроса выгрузки с форматом и фильтрами
    pub fn export_path<F: Serialize>(&self, format: ExportFormat, filters: &F) -> Result<String, ApiError> {
        let format_query = build_query(&FormatParam { format })?;
        let filter_query = build_query(filters)?;
        Ok(with_query(
            &format!("{}/export", self.base_path),
            &join_queries(&[&format_query, &filter_query]),
        ))
    }

    /// Запрашивает файл у сервера и инициирует скачивание
    pub async fn export_data<F: Serialize>(&self, format: ExportFormat, filters: &F) -> Result<(), ApiError> {
        let path = self.export_path(format, filters)?;
        let request = finish(Request::get(&api_url(&path)))?;
        let response = send(request).await?;
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let blob = create_blob(&bytes, format.mime_type()).map_err(ApiError::Browser)?;
        download_blob(&blob, &format.file_name(self.resource)).map_err(ApiError::Browser)?;
        log::info!("exported {} as {}", self.resource, format.as_str());
        Ok(())
    }
}

/// Фильтры отсутствуют (справочники выгружаются целиком)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoFilters {}

/// Создает Blob объект из байтов ответа
fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductListParams;

    #[test]
    fn test_export_path_without_filters() {
        let api = ExportApi::new("/brands", "brands");
        assert_eq!(
            api.export_path(ExportFormat::Excel, &NoFilters::default()).unwrap(),
            "/brands/export?format=excel"
        );
    }

    #[test]
    fn test_export_path_carries_filters() {
        let api = ExportApi::new("/products", "products");
        let filters = ProductListParams {
            brand_id: Some(3),
            category_id: Some(0),
            ..Default::default()
        };
        assert_eq!(
            api.export_path(ExportFormat::Pdf, &filters).unwrap(),
            "/products/export?format=pdf&brandId=3"
        );
    }
}
