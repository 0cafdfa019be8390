use contracts::shared::Language;
use contracts::system::notifications::{unread_count, Notification};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::services::ServicesHandle;

/// Notifications of the signed-in user, shared by the bell and the page
#[derive(Clone, Copy)]
pub struct NotificationsStore {
    pub items: RwSignal<Vec<Notification>>,
    services: ServicesHandle,
}

impl NotificationsStore {
    pub fn new(services: ServicesHandle) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            services,
        }
    }

    pub fn unread(&self) -> usize {
        self.items.with(|items| unread_count(items))
    }

    /// Re-fetch the list. Failures are logged by the client and keep the
    /// previous list on screen.
    pub fn refresh(&self, lang: Language) {
        let items = self.items;
        let api = self.services.with_value(|s| s.notifications.clone());
        spawn_local(async move {
            if let Ok(list) = api.list(lang).await {
                let _ = items.try_set(list);
            }
        });
    }

    pub fn mark_read(&self, id: i64, lang: Language) {
        let store = *self;
        let api = self.services.with_value(|s| s.notifications.clone());
        spawn_local(async move {
            if api.mark_read(id, lang).await.is_ok() {
                store.refresh(lang);
            }
        });
    }

    pub fn mark_all_read(&self, lang: Language) {
        let store = *self;
        let api = self.services.with_value(|s| s.notifications.clone());
        spawn_local(async move {
            if api.mark_all_read(lang).await.is_ok() {
                store.refresh(lang);
            }
        });
    }
}

pub fn use_notifications() -> NotificationsStore {
    use_context::<NotificationsStore>().expect("NotificationsStore not provided")
}
