use arabul_core::Session;

use super::ArabulClient;
use crate::error::ApiError;
use crate::types::{Acknowledgement, ComplaintSubmission};

impl ArabulClient {
    /// Files a complaint, optionally about a specific supplier
    /// (`POST /submit-complaint`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyComplaint`] for blank text without contacting
    /// the backend, otherwise any [`ApiError`] from the request.
    pub async fn submit_complaint(
        &self,
        session: &Session,
        supplier_id: Option<&str>,
        text: &str,
    ) -> Result<Acknowledgement, ApiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ApiError::EmptyComplaint);
        }

        let url = self.endpoint(&["submit-complaint"])?;
        let body = ComplaintSubmission {
            user_id: session.user_id,
            complaint_text: text,
            supplier_id,
        };

        let request = self.client.post(url).json(&body);
        let ack: Acknowledgement = Self::send_json(request, "submit-complaint").await?;
        tracing::info!(?supplier_id, success = ack.success, "complaint submitted");
        Ok(ack)
    }
}
