//! KYC endpoints: status plus multipart document upload.

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::KycStatusResponse;
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /kyc/status` — overall status plus uploaded documents.
    pub async fn kyc_status(&self) -> Result<KycStatusResponse, ApiError> {
        self.get("/kyc/status").await
    }

    /// `POST /kyc/upload` — multipart `type` + `document` fields.
    /// Browser only: the document comes from a file input.
    #[cfg(feature = "hydrate")]
    pub async fn upload_kyc_document(
        &self,
        doc_type: &str,
        file: web_sys::File,
    ) -> Result<KycStatusResponse, ApiError> {
        use super::client::{Body, Method};

        self.request(
            Method::Post,
            "/kyc/upload",
            Body::Document { doc_type: doc_type.to_owned(), file },
        )
        .await
    }
}
