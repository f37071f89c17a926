//! Theme management module for the application.
//!
//! The theme preference is the only piece of state shared across pages.
//! It is persisted in localStorage and applied by swapping the theme stylesheet.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Forest,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS class and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Forest => "forest",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Светлая",
            Theme::Dark => "Тёмная",
            Theme::Forest => "Лесная",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Light => "Светлый фон, подходит для работы днём",
            Theme::Dark => "Тёмный фон, меньше нагружает глаза вечером",
            Theme::Forest => "Приглушённые зелёные тона",
        }
    }

    pub fn css_path(&self) -> String {
        format!("/static/themes/{0}/{0}.css", self.as_str())
    }

    /// Unknown values fall back to the default theme.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "forest" => Theme::Forest,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Light, Theme::Dark, Theme::Forest]
    }
}

const THEME_STORAGE_KEY: &str = "inventory-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to persist theme: {:?}", e);
        }
    }
}

/// Apply theme by loading the theme CSS file.
fn apply_theme_css(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", &theme.css_path());
        let _ = head.append_child(&link);
    }

    // data-theme на body для дополнительных селекторов
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_css(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme_css(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Theme cards with the active one highlighted.
#[component]
pub fn ThemeOptions() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="theme-options">
            {Theme::all().into_iter().map(|theme| {
                let is_active = move || ctx.get_theme() == theme;
                view! {
                    <button
                        class=move || if is_active() { "theme-option theme-option--active" } else { "theme-option" }
                        data-theme-preview=theme.as_str()
                        on:click=move |_| ctx.set_theme(theme)
                    >
                        <span class="theme-option__swatch"></span>
                        <span class="theme-option__name">{theme.display_name()}</span>
                        <span class="theme-option__description">{theme.description()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("forest"), Theme::Forest);
        assert_eq!(Theme::parse("neon"), Theme::Light);
    }

    #[test]
    fn test_css_path() {
        assert_eq!(Theme::Dark.css_path(), "/static/themes/dark/dark.css");
    }
}
