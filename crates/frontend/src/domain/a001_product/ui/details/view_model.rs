//! ViewModel формы товара
//!
//! Форма открывается в модальном окне поверх списка. Для редактирования
//! запись перечитывается с сервера, чтобы не затирать чужие изменения остатка.

use super::model::ProductFormData;
use crate::domain::a001_product::api;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    pub open: RwSignal<bool>,
    pub id: RwSignal<Option<EntityId>>,
    pub form: RwSignal<ProductFormData>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(None),
            form: RwSignal::new(ProductFormData::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn title(&self) -> Signal<String> {
        let id = self.id;
        Signal::derive(move || {
            if id.get().is_some() {
                "Редактирование товара".to_string()
            } else {
                "Новый товар".to_string()
            }
        })
    }

    pub fn open_new(&self) {
        self.id.set(None);
        self.form.set(ProductFormData::default());
        self.error.set(None);
        self.open.set(true);
    }

    /// Открыть на редактирование: сначала данные строки, затем свежие с сервера
    pub fn open_edit(&self, product: &Product) {
        let id = product.id;
        self.id.set(Some(id));
        self.form.set(ProductFormData::from_product(product));
        self.error.set(None);
        self.open.set(true);
        self.loading.set(true);

        let this = *self;
        leptos::task::spawn_local(async move {
            match api::fetch_product(id).await {
                Ok(fresh) => {
                    if this.id.get_untracked() == Some(id) {
                        this.form.set(ProductFormData::from_product(&fresh));
                    }
                }
                Err(e) => log::error!("Failed to load product {}: {}", id, e),
            }
            this.loading.set(false);
        });
    }

    pub fn close(&self) {
        self.open.set(false);
        self.id.set(None);
        self.form.set(ProductFormData::default());
        self.error.set(None);
    }

    pub fn update(&self, f: impl FnOnce(&mut ProductFormData)) {
        self.form.update(f);
    }

    /// Сохранить; после успеха форма закрывается и вызывается `on_saved`
    pub fn save(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self.form.get_untracked().to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        self.saving.set(true);
        self.error.set(None);
        let id = self.id.get_untracked();
        let this = *self;

        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_product(id, &dto).await,
                None => api::create_product(&dto).await,
            };
            this.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Product {} saved", saved.id);
                    this.close();
                    on_saved.run(());
                }
                Err(e) => log::error!("Failed to save product: {}", e),
            }
        });
    }
}

impl Default for ProductDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
