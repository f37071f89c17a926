//! ViewModel справочника на вкладке настроек.
//!
//! Все переходы состояния делает [`CrudState`]; здесь только сетевые вызовы
//! и запись результата обратно в сигнал. Ошибки пишутся в лог и не
//! показываются пользователю.

use crate::shared::api_error::ApiError;
use crate::shared::crud_state::{CrudState, FormData, Identified, SaveCommand};
use crate::shared::export::{ExportApi, NoFilters};
use contracts::domain::common::EntityId;
use contracts::enums::ExportFormat;
use leptos::prelude::*;
use std::future::Future;
use std::marker::PhantomData;

/// Сетевые операции одного справочника
pub trait CrudResource: 'static {
    type Entity: Clone + PartialEq + Identified + Send + Sync + 'static;
    type Form: FormData<Entity = Self::Entity> + Send + Sync + 'static;

    /// Имя ресурса для логов
    const LABEL: &'static str;

    fn fetch_all() -> impl Future<Output = Result<Vec<Self::Entity>, ApiError>>;

    fn create(
        params: <Self::Form as FormData>::Params,
    ) -> impl Future<Output = Result<Self::Entity, ApiError>>;

    fn update(
        id: EntityId,
        params: <Self::Form as FormData>::Params,
    ) -> impl Future<Output = Result<Self::Entity, ApiError>>;

    fn delete(id: EntityId) -> impl Future<Output = Result<(), ApiError>>;

    fn export() -> ExportApi;
}

pub type ResourceState<R> = CrudState<<R as CrudResource>::Entity, <R as CrudResource>::Form>;

pub struct CrudVm<R: CrudResource> {
    pub state: RwSignal<ResourceState<R>>,
    /// Список записей; меняется только при загрузке
    items: Memo<Vec<R::Entity>>,
    /// Увеличивается после каждой успешной загрузки списка
    pub version: RwSignal<u64>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: CrudResource> Clone for CrudVm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudResource> Copy for CrudVm<R> {}

impl<R: CrudResource> CrudVm<R> {
    pub fn new() -> Self {
        let state = RwSignal::new(CrudState::new());
        Self {
            state,
            items: Memo::new(move |_| state.with(|s: &ResourceState<R>| s.items.clone())),
            version: RwSignal::new(0),
            _resource: PhantomData,
        }
    }

    pub fn items(&self) -> Memo<Vec<R::Entity>> {
        self.items
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn is_saving(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_saving()))
    }

    pub fn is_deleting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_deleting()))
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_busy()))
    }

    pub fn export_disabled(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || !state.with(|s| s.can_export()))
    }

    /// Полная перезагрузка списка; локальная копия заменяется целиком
    pub fn load(&self) {
        let this = *self;
        self.state.update(|s| s.begin_load());
        leptos::task::spawn_local(async move {
            let items = match R::fetch_all().await {
                Ok(items) => Some(items),
                Err(e) => {
                    log::error!("Failed to load {}: {}", R::LABEL, e);
                    None
                }
            };
            let loaded = items.is_some();
            this.state.update(|s| s.finish_load(items));
            if loaded {
                this.version.update(|v| *v += 1);
            }
        });
    }

    pub fn open_new(&self) {
        self.state.update(|s| s.open_modal(None));
    }

    pub fn open_edit(&self, entity: &R::Entity) {
        self.state.update(|s| s.open_modal(Some(entity)));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close_modal());
    }

    pub fn update_form(&self, f: impl FnOnce(&mut R::Form)) {
        self.state.update(|s| s.update_form(f));
    }

    /// Сохранение: `update` для редактируемой записи, иначе `create`.
    /// Пустое имя не отправляется.
    pub fn save(&self) {
        let mut command = None;
        self.state.update(|s| command = s.begin_save());
        let Some(command) = command else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            let result = match command {
                SaveCommand::Create(params) => R::create(params).await,
                SaveCommand::Update(id, params) => R::update(id, params).await,
            };
            match result {
                Ok(_) => {
                    this.state.update(|s| s.save_succeeded());
                    this.load();
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", R::LABEL, e);
                    this.state.update(|s| s.save_failed());
                }
            }
        });
    }

    pub fn request_delete(&self, entity: &R::Entity) {
        self.state.update(|s| s.request_delete(entity));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
    }

    pub fn confirm_delete(&self) {
        let mut id = None;
        self.state.update(|s| id = s.begin_delete());
        let Some(id) = id else {
            return;
        };

        let this = *self;
        leptos::task::spawn_local(async move {
            match R::delete(id).await {
                Ok(()) => {
                    this.state.update(|s| s.delete_succeeded());
                    this.load();
                }
                Err(e) => {
                    log::error!("Failed to delete {} {}: {}", R::LABEL, id, e);
                    this.state.update(|s| s.delete_failed());
                }
            }
        });
    }

    pub fn export(&self, format: ExportFormat) {
        leptos::task::spawn_local(async move {
            if let Err(e) = R::export().export_data(format, &NoFilters {}).await {
                log::error!("Failed to export {}: {}", R::LABEL, e);
            }
        });
    }
}

impl<R: CrudResource> Default for CrudVm<R> {
    fn default() -> Self {
        Self::new()
    }
}
