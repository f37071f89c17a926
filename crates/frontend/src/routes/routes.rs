use crate::domain::a001_product::ui::list::ProductList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::settings::ui::SettingsPage;
use leptos::prelude::*;

/// Содержимое центральной области для активной страницы
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || match ctx.active.get() {
        Page::Products => view! { <ProductList /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the component is created
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}
