use crate::shared::components::number_field::NumberField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notification::NotificationService;
use crate::system::settings::api;
use contracts::system::settings::{
    clamp_debt_due_days, AppSettings, DEBT_DUE_DAYS_DEFAULT, DEBT_DUE_DAYS_MAX, DEBT_DUE_DAYS_MIN,
};
use leptos::prelude::*;
use thaw::*;

/// Настройка срока погашения долга
#[derive(Clone, Copy)]
pub struct DebtSettingsVm {
    pub debt_due_days: RwSignal<i32>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl DebtSettingsVm {
    pub fn new() -> Self {
        Self {
            debt_due_days: RwSignal::new(DEBT_DUE_DAYS_DEFAULT),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Принять значение, подтверждённое сервером
    pub fn apply(&self, settings: &AppSettings) {
        self.debt_due_days
            .set(clamp_debt_due_days(settings.debt_due_days as f64));
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_settings().await {
                Ok(settings) => this.apply(&settings),
                Err(e) => log::error!("Failed to load settings: {}", e),
            }
            this.loading.set(false);
        });
    }

    /// Сохранение с уведомлением о результате
    pub fn save(&self, notifications: NotificationService) {
        if self.saving.get_untracked() {
            return;
        }
        let settings = AppSettings {
            debt_due_days: self.debt_due_days.get_untracked(),
        };
        let this = *self;
        this.saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_settings(&settings).await {
                Ok(saved) => {
                    this.apply(&saved);
                    notifications.success("Настройки сохранены");
                }
                Err(e) => {
                    log::error!("Failed to save settings: {}", e);
                    notifications.error("Не удалось сохранить настройки");
                }
            }
            this.saving.set(false);
        });
    }
}

impl Default for DebtSettingsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DebtsTab(vm: DebtSettingsVm, notifications: NotificationService) -> impl IntoView {
    let disabled = Signal::derive(move || vm.loading.get() || vm.saving.get());

    view! {
        <div class="settings-section">
            <PageHeader
                title="Долги"
                subtitle="Срок, после которого задолженность считается просроченной".to_string()
            />

            <div class="form__group form__group--inline">
                <label class="form__label" for="debt-due-days">
                    {format!("Срок погашения, дней ({}–{})", DEBT_DUE_DAYS_MIN, DEBT_DUE_DAYS_MAX)}
                </label>
                <NumberField
                    value=vm.debt_due_days
                    min=DEBT_DUE_DAYS_MIN
                    max=DEBT_DUE_DAYS_MAX
                    id="debt-due-days"
                    disabled=disabled
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=disabled
                    on_click=move |_| vm.save(notifications)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Сохранение..." } else { " Сохранить" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_value_replaces_local_edit() {
        let owner = Owner::new();
        owner.set();
        let vm = DebtSettingsVm::new();
        vm.debt_due_days.set(45);

        vm.apply(&AppSettings { debt_due_days: 60 });
        assert_eq!(vm.debt_due_days.get_untracked(), 60);

        vm.apply(&AppSettings { debt_due_days: 0 });
        assert_eq!(vm.debt_due_days.get_untracked(), DEBT_DUE_DAYS_MIN);
    }
}
