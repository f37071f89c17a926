use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Страница приложения, выбираемая в боковом меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Products,
    Settings,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Products => "Товары",
            Page::Settings => "Настройки",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn all() -> [Page; 2] {
        [Page::Products, Page::Settings]
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ActiveQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

/// Страница из `location.search` (`?active=settings`)
pub fn page_from_search(search: &str) -> Option<Page> {
    let query: ActiveQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.active.as_deref().and_then(Page::from_key)
}

/// Строка запроса для активной страницы, с ведущим `?`
pub fn search_for_page(page: Page) -> String {
    let query = ActiveQuery {
        active: Some(page.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает страницу из URL и дальше держит URL в актуальном состоянии
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, page: Page) {
        log::debug!("activate page '{}'", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?active=settings"), Some(Page::Settings));
        assert_eq!(page_from_search("active=products"), Some(Page::Products));
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?active=reports"), None);
    }

    #[test]
    fn test_search_for_page() {
        assert_eq!(search_for_page(Page::Settings), "?active=settings");
        assert_eq!(page_from_search(&search_for_page(Page::Products)), Some(Page::Products));
    }
}
