//! Admin mirrors: dashboard stats, audit logs, and the user management
//! table with its optimistic activate/suspend toggle.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::{AdminDashboard, AdminUser, AuditLog, Page};
use crate::session::substrate::KeyValueStore;

pub const ADMIN_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, Default)]
pub struct AdminDashboardState {
    pub dashboard: Option<AdminDashboard>,
    pub audit_logs: Vec<AuditLog>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl AdminDashboardState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_snapshot(
        &mut self,
        seq: u64,
        dashboard: AdminDashboard,
        audit_logs: Vec<AuditLog>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.dashboard = Some(dashboard);
        self.audit_logs = audit_logs;
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
}

#[derive(Clone, Debug)]
pub struct AdminUsersState {
    pub users: Vec<AdminUser>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    /// User id with a status toggle in flight, if any.
    pub toggling: Option<String>,
    seq: u64,
}

impl Default for AdminUsersState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
            page: 1,
            limit: ADMIN_PAGE_SIZE,
            search: String::new(),
            loading: false,
            error: None,
            toggling: None,
            seq: 0,
        }
    }
}

impl AdminUsersState {
    pub fn begin(&mut self, page: u32, search: &str) -> u64 {
        self.seq += 1;
        self.page = page;
        self.search = search.to_owned();
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_page(&mut self, seq: u64, page: Page<AdminUser>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.users = page.records;
        self.total = page.total;
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.toggling = None;
        self.error = Some(message);
        true
    }

    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }

    /// Flip a user's active flag in place and return the pre-toggle value,
    /// or `None` if the row is no longer in the table.
    pub fn apply_toggle(&mut self, user_id: &str) -> Option<bool> {
        let user = self.users.iter_mut().find(|u| u.id == user_id)?;
        let previous = user.is_active;
        user.is_active = !previous;
        self.toggling = Some(user_id.to_owned());
        Some(previous)
    }

    /// Restore the recorded pre-toggle value after a rejected mutation.
    pub fn rollback_toggle(&mut self, user_id: &str, previous: bool) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.is_active = previous;
        }
        self.toggling = None;
    }
}

pub async fn fetch_dashboard<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<AdminDashboardState>,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin());

    let (dashboard, logs) =
        futures::join!(client.admin_dashboard(), client.audit_logs(1, ADMIN_PAGE_SIZE));

    match (dashboard, logs) {
        (Ok(dashboard), Ok(logs)) => {
            state.update(|s| {
                s.apply_snapshot(seq, dashboard, logs.records);
            });
        }
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("admin dashboard fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

pub async fn fetch_users<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<AdminUsersState>,
    page: u32,
    search: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin(page, search));

    match client.admin_users(page, ADMIN_PAGE_SIZE, search).await {
        Ok(users) => {
            state.update(|s| {
                s.apply_page(seq, users);
            });
        }
        Err(e) => {
            leptos::logging::warn!("admin user fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Toggle a user's active status optimistically. The row flips before the
/// request goes out; a rejected mutation restores the recorded value.
pub async fn toggle_user_status<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<AdminUsersState>,
    user_id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut previous = None;
    state.update(|s| previous = s.apply_toggle(user_id));

    let Some(previous) = previous else {
        return;
    };

    match client.set_user_active(user_id, !previous).await {
        Ok(_) => {
            state.update(|s| s.toggling = None);
        }
        Err(e) => {
            leptos::logging::warn!("user status toggle failed: {e}");
            state.update(|s| {
                s.rollback_toggle(user_id, previous);
                s.error = Some(e.ui_message());
            });
        }
    }
}
