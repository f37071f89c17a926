//! Всплывающие уведомления об успехе/ошибке операции.
//!
//! Уведомление показывается через thaw `MessageBar` и скрывается само
//! через [`NOTICE_TIMEOUT_MS`].

use leptos::prelude::*;
use thaw::*;

pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notice>>,
    /// Номер последнего показанного уведомления; старый таймер не скрывает новое
    seq: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    fn show(&self, kind: NoticeKind, message: String) {
        self.current.set(Some(Notice { kind, message }));
        self.seq.update(|n| *n += 1);
        let shown = self.seq.get_untracked();

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if this.seq.try_get_untracked() == Some(shown) {
                this.dismiss();
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Место вывода уведомлений
#[component]
pub fn NotificationHost(service: NotificationService) -> impl IntoView {
    view! {
        {move || service.current().map(|notice| {
            let intent = match notice.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notification-host" on:click=move |_| service.dismiss()>
                    <MessageBar intent=intent>
                        <span>{notice.message}</span>
                    </MessageBar>
                </div>
            }
        })}
    }
}
