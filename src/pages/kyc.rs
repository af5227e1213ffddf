//! Identity verification: overall status, documents, uploads.

use leptos::prelude::*;

use crate::app::use_client;
use crate::components::layout::DashboardLayout;
use crate::net::types::KycStatus;
use crate::state::kyc::{self, KycState};

fn status_label(status: KycStatus) -> &'static str {
    match status {
        KycStatus::NotStarted => "Not started",
        KycStatus::Pending => "Under review",
        KycStatus::Approved => "Approved",
        KycStatus::Rejected => "Rejected",
    }
}

#[component]
pub fn KycPage() -> impl IntoView {
    let client = use_client();
    let state = RwSignal::new(KycState::default());
    let doc_type = RwSignal::new("passport".to_owned());

    Effect::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                kyc::fetch_status(&client, state).await;
            });
        }
    });

    // File uploads need the real DOM; the handler only exists in the
    // browser build.
    #[cfg(feature = "hydrate")]
    let on_upload = {
        use wasm_bindgen::JsCast;
        let client = client.clone();
        move |ev: leptos::ev::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let client = client.clone();
            let chosen = doc_type.get_untracked();
            leptos::task::spawn_local(async move {
                kyc::upload_document(&client, state, &chosen, file).await;
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_upload = move |_ev: leptos::ev::Event| {};

    view! {
        <DashboardLayout title="Verification">
            {move || state.get().error.map(|msg| view! { <p class="page-error">{msg}</p> })}

            <p class="kyc-status">
                "Status: " <strong>{move || status_label(state.get().overall)}</strong>
            </p>

            <section class="kyc-upload">
                <h2>"Upload a document"</h2>
                <label>
                    "Document type"
                    <select on:change=move |ev| doc_type.set(event_target_value(&ev))>
                        <option value="passport">"Passport"</option>
                        <option value="national_id">"National ID"</option>
                        <option value="drivers_license">"Driver's license"</option>
                        <option value="proof_of_address">"Proof of address"</option>
                    </select>
                </label>
                <input type="file" accept="image/*,.pdf" on:change=on_upload/>
                <Show when=move || state.get().uploading>
                    <p>"Uploading..."</p>
                </Show>
            </section>

            <section class="kyc-documents">
                <h2>"Submitted documents"</h2>
                <For each=move || state.get().documents key=|d| d.id.clone() let:doc>
                    <div class="kyc-doc">
                        <span>{doc.doc_type.clone()}</span>
                        <span>{status_label(doc.status)}</span>
                        <span>{doc.notes.clone().unwrap_or_default()}</span>
                        <span>{doc.uploaded_at.clone()}</span>
                    </div>
                </For>
            </section>
        </DashboardLayout>
    }
}
