//! Состояние страницы справочника: список, модальная форма, подтверждение удаления.
//!
//! Вместо набора независимых флагов (`loading`, `saving`, `deleting`) ресурс
//! находится ровно в одной фазе. Переходы чистые: асинхронные вызовы делает
//! view model, а состояние только говорит, какую команду выполнить.

use contracts::domain::common::EntityId;

/// Фаза запроса для одного ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Saving,
    Deleting,
}

/// Запись с числовым идентификатором
pub trait Identified {
    fn id(&self) -> EntityId;
}

/// Буфер формы создания/редактирования
pub trait FormData: Clone + Default {
    type Entity;
    type Params: 'static;

    /// Заполнить форму из существующей записи
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Обязательное поле `name`
    fn name(&self) -> &str;

    /// Параметры запроса create/update
    fn to_params(&self) -> Self::Params;
}

/// Что нужно отправить на сервер при сохранении
#[derive(Debug, Clone, PartialEq)]
pub enum SaveCommand<P> {
    Create(P),
    Update(EntityId, P),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<T, F> {
    pub items: Vec<T>,
    pub phase: Phase,
    pub modal_open: bool,
    /// Запись, открытая на редактирование; `None` для новой
    pub editing: Option<T>,
    pub form: F,
    /// Запись, ожидающая подтверждения удаления
    pub pending_delete: Option<T>,
}

impl<T, F: Default> Default for CrudState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
            modal_open: false,
            editing: None,
            form: F::default(),
            pending_delete: None,
        }
    }
}

impl<T, F> CrudState<T, F>
where
    T: Clone + Identified,
    F: FormData<Entity = T>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_saving(&self) -> bool {
        self.phase == Phase::Saving
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// Идёт мутация: кнопки сохранения/удаления заблокированы
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Saving | Phase::Deleting)
    }

    /// Выгрузка доступна только для загруженного непустого списка
    pub fn can_export(&self) -> bool {
        !self.is_loading() && !self.items.is_empty()
    }

    pub fn begin_load(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Loading;
        }
    }

    /// Завершение загрузки. При успехе список заменяется целиком,
    /// при ошибке остаётся прежним.
    pub fn finish_load(&mut self, items: Option<Vec<T>>) {
        if let Some(items) = items {
            self.items = items;
        }
        if self.phase == Phase::Loading {
            self.phase = Phase::Idle;
        }
    }

    /// Открыть форму: пустую для новой записи или заполненную из `entity`
    pub fn open_modal(&mut self, entity: Option<&T>) {
        self.form = entity.map(F::from_entity).unwrap_or_default();
        self.editing = entity.cloned();
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.editing = None;
        self.form = F::default();
    }

    pub fn update_form(&mut self, f: impl FnOnce(&mut F)) {
        f(&mut self.form);
    }

    /// Начать сохранение. `None` если имя пустое или уже идёт запрос.
    pub fn begin_save(&mut self) -> Option<SaveCommand<F::Params>> {
        if self.is_busy() || self.form.name().trim().is_empty() {
            return None;
        }
        self.phase = Phase::Saving;
        let params = self.form.to_params();
        Some(match &self.editing {
            Some(entity) => SaveCommand::Update(entity.id(), params),
            None => SaveCommand::Create(params),
        })
    }

    /// Успешное сохранение закрывает форму; после этого список перезагружается
    pub fn save_succeeded(&mut self) {
        self.phase = Phase::Idle;
        self.close_modal();
    }

    /// Ошибка сохранения: форма остаётся открытой с введёнными данными
    pub fn save_failed(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn request_delete(&mut self, entity: &T) {
        self.pending_delete = Some(entity.clone());
    }

    pub fn cancel_delete(&mut self) {
        if !self.is_deleting() {
            self.pending_delete = None;
        }
    }

    /// Начать удаление подтверждённой записи
    pub fn begin_delete(&mut self) -> Option<EntityId> {
        if self.is_busy() {
            return None;
        }
        let id = self.pending_delete.as_ref()?.id();
        self.phase = Phase::Deleting;
        Some(id)
    }

    pub fn delete_succeeded(&mut self) {
        self.phase = Phase::Idle;
        self.pending_delete = None;
    }

    /// Ошибка удаления: диалог остаётся открытым
    pub fn delete_failed(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: EntityId,
        name: String,
    }

    impl Identified for Item {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct ItemForm {
        name: String,
    }

    impl FormData for ItemForm {
        type Entity = Item;
        type Params = String;

        fn from_entity(entity: &Item) -> Self {
            Self {
                name: entity.name.clone(),
            }
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn to_params(&self) -> String {
            self.name.trim().to_string()
        }
    }

    fn item(id: EntityId, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    type State = CrudState<Item, ItemForm>;

    #[test]
    fn test_load_replaces_list_and_clears_phase() {
        let mut s = State::new();
        s.items = vec![item(1, "stale"), item(2, "gone")];
        s.begin_load();
        assert!(s.is_loading());
        assert!(!s.can_export());

        s.finish_load(Some(vec![item(1, "fresh")]));
        assert_eq!(s.items, vec![item(1, "fresh")]);
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.can_export());
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut s = State::new();
        s.items = vec![item(1, "kept")];
        s.begin_load();
        s.finish_load(None);
        assert_eq!(s.items, vec![item(1, "kept")]);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_open_for_edit_prefills_and_new_clears() {
        let mut s = State::new();
        let x = item(7, "Michelin");
        s.open_modal(Some(&x));
        assert!(s.modal_open);
        assert_eq!(s.form.name, "Michelin");
        assert_eq!(s.editing, Some(x));

        s.update_form(|f| f.name = "typed".into());
        s.open_modal(None);
        assert_eq!(s.form, ItemForm::default());
        assert_eq!(s.editing, None);
    }

    #[test]
    fn test_close_resets_form_and_editing() {
        let mut s = State::new();
        s.open_modal(Some(&item(7, "Michelin")));
        s.close_modal();
        assert!(!s.modal_open);
        assert_eq!(s.editing, None);
        assert_eq!(s.form, ItemForm::default());
    }

    #[test]
    fn test_blank_name_never_produces_a_command() {
        let mut s = State::new();
        s.open_modal(None);
        s.update_form(|f| f.name = "   ".into());
        assert_eq!(s.begin_save(), None);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_save_dispatches_create_or_update() {
        let mut s = State::new();
        s.open_modal(None);
        s.update_form(|f| f.name = " New ".into());
        assert_eq!(s.begin_save(), Some(SaveCommand::Create("New".to_string())));
        assert!(s.is_saving());
        // второй клик во время запроса ничего не делает
        assert_eq!(s.begin_save(), None);
        s.save_succeeded();

        s.open_modal(Some(&item(4, "Old")));
        assert_eq!(
            s.begin_save(),
            Some(SaveCommand::Update(4, "Old".to_string()))
        );
    }

    #[test]
    fn test_save_success_closes_and_failure_keeps_modal() {
        let mut s = State::new();
        s.open_modal(Some(&item(4, "Old")));
        s.begin_save();
        s.save_failed();
        assert!(s.modal_open);
        assert_eq!(s.form.name, "Old");
        assert_eq!(s.phase, Phase::Idle);

        s.begin_save();
        s.save_succeeded();
        assert!(!s.modal_open);
        assert_eq!(s.editing, None);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut s = State::new();
        assert_eq!(s.begin_delete(), None);

        s.request_delete(&item(3, "Winter"));
        assert!(!s.modal_open);
        assert_eq!(s.begin_delete(), Some(3));
        assert!(s.is_deleting());
        s.cancel_delete();
        assert!(s.pending_delete.is_some());

        s.delete_succeeded();
        assert_eq!(s.pending_delete, None);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_cancel_and_failed_delete() {
        let mut s = State::new();
        s.request_delete(&item(3, "Winter"));
        s.cancel_delete();
        assert_eq!(s.pending_delete, None);

        s.request_delete(&item(3, "Winter"));
        s.begin_delete();
        s.delete_failed();
        assert_eq!(s.pending_delete.as_ref().map(|i| i.id), Some(3));
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_late_load_does_not_clear_saving() {
        let mut s = State::new();
        s.begin_load();
        s.phase = Phase::Saving;
        s.finish_load(Some(vec![item(1, "a")]));
        assert!(s.is_saving());
    }
}
