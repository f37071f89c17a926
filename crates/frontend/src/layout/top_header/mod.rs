//! TopHeader component - application top navigation bar.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Шинный склад"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__page">{move || ctx.active.get().title()}</span>
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.activate(Page::Settings)
                    title="Настройки"
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
