use crate::shared::icons::icon;
use contracts::enums::ExportFormat;
use leptos::prelude::*;
use thaw::*;

/// Пара кнопок выгрузки (Excel, PDF).
///
/// Кнопки заблокированы, пока список пуст или загружается.
#[component]
pub fn ExportButtons(
    #[prop(into)] disabled: Signal<bool>,
    on_export: Callback<ExportFormat>,
) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small>
            {[ExportFormat::Excel, ExportFormat::Pdf].into_iter().map(|format| {
                view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=disabled
                        on_click=move |_| on_export.run(format)
                    >
                        {icon(if format == ExportFormat::Pdf { "file-text" } else { "download" })}
                        {format!(" {}", format.display_name())}
                    </Button>
                }
            }).collect_view()}
        </Flex>
    }
}
