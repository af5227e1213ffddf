//! Notification mirror backing the header bell.

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::Notification;
use crate::session::substrate::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub unread: u64,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether the dropdown panel is open.
    pub open: bool,
    seq: u64,
}

impl NotificationsState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_snapshot(&mut self, seq: u64, items: Vec<Notification>, unread: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.items = items;
        self.unread = unread;
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Mark one item read locally; the unread badge follows.
    pub fn mark_read(&mut self, id: &str) {
        for item in &mut self.items {
            if item.id == id && !item.read {
                item.read = true;
                self.unread = self.unread.saturating_sub(1);
            }
        }
    }
}

pub async fn fetch_notifications<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<NotificationsState>,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin());

    let (items, unread) = futures::join!(client.notifications(), client.unread_count());

    match (items, unread) {
        (Ok(items), Ok(unread)) => {
            state.update(|s| {
                s.apply_snapshot(seq, items, unread.count);
            });
        }
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("notification fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Mark a notification read on the backend and mirror the change locally.
pub async fn mark_read<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<NotificationsState>,
    id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    match client.mark_notification_read(id).await {
        Ok(_) => state.update(|s| s.mark_read(id)),
        Err(e) => {
            leptos::logging::warn!("mark notification read failed: {e}");
        }
    }
}
