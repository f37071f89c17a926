use crate::shared::number_input::RawNumber;
use leptos::prelude::*;

/// Числовое поле с границами.
///
/// Текст поля живёт отдельно от значения: промежуточный ввод (`-`, `.`, пусто)
/// не меняет `value`; при потере фокуса текст возвращается к зафиксированному
/// значению, так что пустое значение не сохраняется.
#[component]
pub fn NumberField(
    value: RwSignal<i32>,
    min: i32,
    max: i32,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(value.get_untracked().to_string());

    // Значение могло прийти с сервера после монтирования
    Effect::new(move |_| {
        let current = value.get();
        draft.set(current.to_string());
    });

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        draft.set(text.clone());
        if let Some(n) = RawNumber::from(text).commit_clamped(min, max) {
            value.set(n);
        }
    };

    view! {
        <input
            type="number"
            class="input input--number"
            id=id
            min=min
            max=max
            step="1"
            prop:value=move || draft.get()
            on:input=on_input
            on:blur=move |_| draft.set(value.get_untracked().to_string())
            disabled=move || disabled.get()
        />
    }
}
