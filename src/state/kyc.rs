//! KYC verification mirror.

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::{KycDocument, KycStatus};
use crate::session::substrate::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct KycState {
    pub overall: KycStatus,
    pub documents: Vec<KycDocument>,
    pub loading: bool,
    pub uploading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl KycState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_status(
        &mut self,
        seq: u64,
        overall: KycStatus,
        documents: Vec<KycDocument>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.overall = overall;
        self.documents = documents;
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.uploading = false;
        self.error = Some(message);
        true
    }
}

pub async fn fetch_status<T, D, C>(client: &ApiClient<T, D, C>, state: RwSignal<KycState>)
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin());

    match client.kyc_status().await {
        Ok(status) => {
            state.update(|s| {
                s.apply_status(seq, status.overall_status, status.documents);
            });
        }
        Err(e) => {
            leptos::logging::warn!("kyc status fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Upload one document, then re-fetch so the new row and any status change
/// come from the backend rather than a local guess.
#[cfg(feature = "hydrate")]
pub async fn upload_document<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<KycState>,
    doc_type: &str,
    file: web_sys::File,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    state.update(|s| s.uploading = true);

    match client.upload_kyc_document(doc_type, file).await {
        Ok(_) => {
            state.update(|s| s.uploading = false);
            fetch_status(client, state).await;
        }
        Err(e) => {
            state.update(|s| {
                s.uploading = false;
                s.error = Some(e.ui_message());
            });
        }
    }
}
