use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::document::DocumentApplication;

/// Query parameters for the admin document list; mirrors the table controls
/// (search box, status filter, type filter, sortable column headers).
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "documentType")]
    pub document_type: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[serde(rename = "newStatus")]
    #[validate(length(min = 1, message = "New status is required"))]
    pub new_status: String,
    #[serde(rename = "rejectionReason")]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateApproveRequest {
    #[serde(rename = "templateFileName")]
    #[validate(length(min = 1, message = "Template file name is required"))]
    pub template_file_name: String,
    #[serde(rename = "newStatus")]
    pub new_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelApplicationRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Wire shape of one application. Key casing matches what the pages already
/// consume (a historical mix of camelCase and snake_case).
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentApplicationResponse {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "documentType")]
    pub document_type: String,
    #[serde(rename = "dateRequested")]
    pub date_requested: Option<DateTime<Utc>>,
    pub status: String,
    pub user_email: String,
    pub purok: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub purpose: Option<String>,
    pub payment_method: Option<String>,
    pub payment_reference_number: Option<String>,
    pub requirements_details: Option<String>,
    #[serde(rename = "requirementsFilePaths")]
    pub requirements_file_paths: Vec<String>,
    #[serde(rename = "generatedDocumentPath")]
    pub generated_document_path: Option<String>,
    pub rejection_reason: Option<String>,
}

impl DocumentApplicationResponse {
    /// Fails when the stored requirements column is corrupt; the caller
    /// reports that as a server error rather than hiding the attachments.
    pub fn from_model(
        application: DocumentApplication,
    ) -> Result<DocumentApplicationResponse, serde_json::Error> {
        let requirements_file_paths = application.requirements_paths()?;

        Ok(DocumentApplicationResponse {
            id: application.id,
            full_name: application.full_name,
            document_type: application.document_type,
            date_requested: application.date_requested,
            status: application.status,
            user_email: application.user_email,
            purok: application.purok,
            birthdate: application.birthdate,
            purpose: application.purpose,
            payment_method: application.payment_method,
            payment_reference_number: application.payment_reference_number,
            requirements_details: application.requirements_details,
            requirements_file_paths,
            generated_document_path: application.generated_path,
            rejection_reason: application.rejection_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_status_request_uses_frontend_keys() {
        let request: UpdateStatusRequest = serde_json::from_str(
            r#"{"newStatus":"Rejected","rejectionReason":"Incomplete requirements"}"#,
        )
        .unwrap();
        assert_eq!(request.new_status, "Rejected");
        assert_eq!(
            request.rejection_reason.as_deref(),
            Some("Incomplete requirements")
        );

        // reason is optional for the other transitions
        let bare: UpdateStatusRequest =
            serde_json::from_str(r#"{"newStatus":"Completed"}"#).unwrap();
        assert!(bare.rejection_reason.is_none());
    }

    #[test]
    fn generate_request_requires_template_name() {
        let request: GenerateApproveRequest = serde_json::from_str(
            r#"{"templateFileName":"barangay_clearance_template.pdf","newStatus":"Approved"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let empty = GenerateApproveRequest {
            template_file_name: "".to_string(),
            new_status: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn response_serializes_with_mixed_casing() {
        let model = DocumentApplication {
            id: 42,
            document_type: "Barangay Clearance".to_string(),
            full_name: "Juan Dela Cruz".to_string(),
            purok: None,
            birthdate: None,
            user_email: "juan@example.com".to_string(),
            purpose: None,
            requirements_details: None,
            payment_method: None,
            payment_reference_number: None,
            requirements_json: Some(r#"["/uploads/id.jpg"]"#.to_string()),
            status: "Pending".to_string(),
            rejection_reason: None,
            generated_path: None,
            hidden_from_history: false,
            date_requested: None,
        };

        let response = DocumentApplicationResponse::from_model(model).unwrap();
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"documentType\""));
        assert!(json.contains("\"user_email\""));
        assert!(json.contains("\"requirementsFilePaths\""));
    }

    #[test]
    fn corrupt_requirements_column_fails_conversion() {
        let model = DocumentApplication {
            id: 1,
            document_type: "Barangay Clearance".to_string(),
            full_name: "x".to_string(),
            purok: None,
            birthdate: None,
            user_email: "x@example.com".to_string(),
            purpose: None,
            requirements_details: None,
            payment_method: None,
            payment_reference_number: None,
            requirements_json: Some("{broken".to_string()),
            status: "Pending".to_string(),
            rejection_reason: None,
            generated_path: None,
            hidden_from_history: false,
            date_requested: None,
        };

        assert!(DocumentApplicationResponse::from_model(model).is_err());
    }
}
