use domain::models::{PartialPrivacyConsent, PrivacyConsent};
use wire::records::{map_single_privacy_consent_response, prepare_privacy_consent_for_backend};

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::services::students::STUDENTS_PATH;

fn consent_path(student_id: &str) -> Result<String, ApiError> {
    Ok(format!(
        "{}/privacy-consent",
        resource_path(STUDENTS_PATH, student_id)?
    ))
}

impl OgsClient {
    pub async fn get_privacy_consent(&self, student_id: &str) -> Result<PrivacyConsent, ApiError> {
        let response = self.transport().get(&consent_path(student_id)?, "").await?;
        Ok(map_single_privacy_consent_response(response)?)
    }

    /// Creates or replaces the consent record of a student.
    pub async fn update_privacy_consent(
        &self,
        student_id: &str,
        consent: &PartialPrivacyConsent,
    ) -> Result<PrivacyConsent, ApiError> {
        let path = consent_path(student_id)?;
        let payload = prepare_privacy_consent_for_backend(validated(consent)?)?;
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        let updated = map_single_privacy_consent_response(response)?;

        tracing::info!(
            student_id = %student_id,
            accepted = updated.accepted,
            "Privacy consent updated"
        );
        Ok(updated)
    }
}
