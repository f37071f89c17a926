use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Контейнер бокового меню; скрывается кнопкой в заголовке
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
