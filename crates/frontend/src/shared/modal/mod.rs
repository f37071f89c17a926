use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Обработчик клавиши: закрывает по Escape, пока владелец callback жив
fn escape_handler(on_close: Callback<()>) -> impl Fn(&str) + 'static {
    move |key: &str| {
        if key == "Escape" {
            on_close.try_run(());
        }
    }
}

/// Close on Escape while the modal is mounted
fn listen_escape(on_close: Callback<()>) {
    let handler = escape_handler(on_close);
    let handle = window_event_listener(ev::keydown, move |event| handler(&event.key()));
    on_cleanup(move || handle.remove());
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content, including the `modal-footer` block with actions
    children: Children,
) -> impl IntoView {
    listen_escape(on_close);

    // Клик по затемнению закрывает, клик внутри окна — нет
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Диалог подтверждения удаления
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    /// Запрос в процессе: кнопка подтверждения заблокирована
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    listen_escape(on_cancel);

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" on:click=move |ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        <span class="modal-title__icon">{icon("alert-triangle")}</span>
                        {title}
                    </h2>
                </div>
                <div class="modal-body">
                    <p>{move || message.get()}</p>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=busy
                    >
                        {icon("delete")}
                        {move || if busy.get() { " Удаление..." } else { " Удалить" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_escape_closes_only_on_escape_key() {
        let owner = Owner::new();
        owner.set();
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);
        let handler = escape_handler(Callback::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        handler("Enter");
        handler("Escape");
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_escape_after_modal_closed_is_ignored() {
        let root = Owner::new();
        let modal = root.child();
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);
        let handler = modal.with(|| {
            escape_handler(Callback::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
        });

        modal.cleanup();
        handler("Escape");
        assert_eq!(closed.load(Ordering::SeqCst), 0);
    }
}
