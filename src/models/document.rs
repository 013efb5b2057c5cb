use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

/// Lifecycle state of a document application. `Pending` is the only state an
/// application is created in; `Rejected`, `Completed` and `Cancelled` accept
/// no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
    Cancelled,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Completed => "Completed",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Rejected | DocumentStatus::Completed | DocumentStatus::Cancelled
        )
    }

    /// The admin transition graph. Nothing re-enters `Pending`.
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        match (self, next) {
            (
                DocumentStatus::Pending,
                DocumentStatus::Approved
                | DocumentStatus::Rejected
                | DocumentStatus::Completed
                | DocumentStatus::Cancelled,
            ) => true,
            (DocumentStatus::Approved, DocumentStatus::Completed | DocumentStatus::Cancelled) => {
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = TransitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(DocumentStatus::Pending),
            "Approved" => Ok(DocumentStatus::Approved),
            "Completed" => Ok(DocumentStatus::Completed),
            "Rejected" => Ok(DocumentStatus::Rejected),
            "Cancelled" => Ok(DocumentStatus::Cancelled),
            other => Err(TransitionError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentType {
    BarangayClearance,
    CertificateOfIndigency,
    BusinessPermitEndorsement,
    CertificateOfResidency,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::BarangayClearance => "Barangay Clearance",
            DocumentType::CertificateOfIndigency => "Certificate of Indigency",
            DocumentType::BusinessPermitEndorsement => "Business Permit Endorsement",
            DocumentType::CertificateOfResidency => "Certificate of Residency",
        }
    }

    pub fn all() -> [DocumentType; 4] {
        [
            DocumentType::BarangayClearance,
            DocumentType::CertificateOfIndigency,
            DocumentType::BusinessPermitEndorsement,
            DocumentType::CertificateOfResidency,
        ]
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DocumentType::all()
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("Unknown document type: {}", value))
    }
}

/// Why a requested transition was refused. Mapped to an HTTP status at the
/// handler layer; the admin UI disabling buttons is not a safety boundary, so
/// every guard is re-checked here before a row is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    UnknownStatus(String),
    Terminal { current: DocumentStatus },
    NotPermitted { from: DocumentStatus, to: DocumentStatus },
    MissingRejectionReason,
    ApprovalRequiresGeneration,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::UnknownStatus(value) => {
                write!(f, "Unknown document status: {}", value)
            }
            TransitionError::Terminal { current } => {
                write!(f, "Document is already {} and can no longer change", current)
            }
            TransitionError::NotPermitted { from, to } => {
                write!(f, "Cannot move a {} document to {}", from, to)
            }
            TransitionError::MissingRejectionReason => {
                write!(f, "A rejection reason is required to reject a document")
            }
            TransitionError::ApprovalRequiresGeneration => {
                write!(
                    f,
                    "Approval requires generating the document; use the generate-and-approve action"
                )
            }
        }
    }
}

/// Validates a plain status update (no generation side effect).
///
/// `Approved` is refused here on purpose: an approved record with no
/// generated file is invalid by policy, so the only path to `Approved` is the
/// generate-and-approve operation.
pub fn validate_status_update(
    current: DocumentStatus,
    requested: DocumentStatus,
    rejection_reason: Option<&str>,
) -> Result<(), TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal { current });
    }

    if requested == DocumentStatus::Approved {
        return Err(TransitionError::ApprovalRequiresGeneration);
    }

    if !current.can_transition_to(requested) {
        return Err(TransitionError::NotPermitted {
            from: current,
            to: requested,
        });
    }

    if requested == DocumentStatus::Rejected
        && rejection_reason.map(str::trim).unwrap_or("").is_empty()
    {
        return Err(TransitionError::MissingRejectionReason);
    }

    Ok(())
}

/// Validates the generate-and-approve transition. Only a `Pending`
/// application can be approved.
pub fn validate_approval(current: DocumentStatus) -> Result<(), TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal { current });
    }

    if !current.can_transition_to(DocumentStatus::Approved) {
        return Err(TransitionError::NotPermitted {
            from: current,
            to: DocumentStatus::Approved,
        });
    }

    Ok(())
}

/// One citizen request for an official document, as stored. Applicant data is
/// an immutable snapshot taken at submission time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DocumentApplication {
    pub id: i64,
    pub document_type: String,
    pub full_name: String,
    pub purok: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub user_email: String,
    pub purpose: Option<String>,
    pub requirements_details: Option<String>,
    pub payment_method: Option<String>,
    pub payment_reference_number: Option<String>,
    pub requirements_json: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub generated_path: Option<String>,
    /// Set when a citizen removes a finished application from their history
    /// view. The record itself is never deleted.
    pub hidden_from_history: bool,
    pub date_requested: Option<DateTime<Utc>>,
}

impl DocumentApplication {
    pub fn status(&self) -> Result<DocumentStatus, TransitionError> {
        self.status.parse()
    }

    /// Uploaded requirement file paths, stored as a JSON array column. A
    /// malformed column is an error, never silently an empty list.
    pub fn requirements_paths(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.requirements_json {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw),
            _ => Ok(Vec::new()),
        }
    }
}

impl Searchable for DocumentApplication {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.full_name,
            &self.document_type,
            &self.user_email,
            self.purpose.as_deref().unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_reaches_every_other_state() {
        for next in [
            DocumentStatus::Approved,
            DocumentStatus::Rejected,
            DocumentStatus::Completed,
            DocumentStatus::Cancelled,
        ] {
            assert!(DocumentStatus::Pending.can_transition_to(next));
        }
    }

    #[test]
    fn nothing_reenters_pending() {
        for from in [
            DocumentStatus::Approved,
            DocumentStatus::Rejected,
            DocumentStatus::Completed,
            DocumentStatus::Cancelled,
        ] {
            assert!(!from.can_transition_to(DocumentStatus::Pending));
        }
    }

    #[test]
    fn terminal_states_accept_no_transition() {
        for from in [
            DocumentStatus::Rejected,
            DocumentStatus::Completed,
            DocumentStatus::Cancelled,
        ] {
            let result = validate_status_update(from, DocumentStatus::Completed, None);
            assert_eq!(result, Err(TransitionError::Terminal { current: from }));
        }
    }

    #[test]
    fn rejection_requires_a_reason() {
        let missing =
            validate_status_update(DocumentStatus::Pending, DocumentStatus::Rejected, None);
        assert_eq!(missing, Err(TransitionError::MissingRejectionReason));

        let blank =
            validate_status_update(DocumentStatus::Pending, DocumentStatus::Rejected, Some("   "));
        assert_eq!(blank, Err(TransitionError::MissingRejectionReason));

        let ok = validate_status_update(
            DocumentStatus::Pending,
            DocumentStatus::Rejected,
            Some("Incomplete requirements"),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn plain_update_never_approves() {
        let result = validate_status_update(
            DocumentStatus::Pending,
            DocumentStatus::Approved,
            None,
        );
        assert_eq!(result, Err(TransitionError::ApprovalRequiresGeneration));
    }

    #[test]
    fn approval_only_from_pending() {
        assert!(validate_approval(DocumentStatus::Pending).is_ok());
        assert!(validate_approval(DocumentStatus::Completed).is_err());
        assert_eq!(
            validate_approval(DocumentStatus::Approved),
            Err(TransitionError::NotPermitted {
                from: DocumentStatus::Approved,
                to: DocumentStatus::Approved,
            })
        );
    }

    #[test]
    fn approved_closes_out_to_completed_or_cancelled() {
        assert!(
            validate_status_update(DocumentStatus::Approved, DocumentStatus::Completed, None)
                .is_ok()
        );
        assert!(
            validate_status_update(DocumentStatus::Approved, DocumentStatus::Cancelled, None)
                .is_ok()
        );
        assert!(
            validate_status_update(DocumentStatus::Approved, DocumentStatus::Rejected, Some("x"))
                .is_err()
        );
    }

    #[test]
    fn status_strings_round_trip() {
        for status in [
            DocumentStatus::Pending,
            DocumentStatus::Approved,
            DocumentStatus::Completed,
            DocumentStatus::Rejected,
            DocumentStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<DocumentStatus>().unwrap(), status);
        }
        assert!("Archived".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn document_type_strings_round_trip() {
        for kind in DocumentType::all() {
            assert_eq!(kind.as_str().parse::<DocumentType>().unwrap(), kind);
        }
        assert!("Cedula".parse::<DocumentType>().is_err());
    }

    fn sample_application(requirements_json: Option<&str>) -> DocumentApplication {
        DocumentApplication {
            id: 42,
            document_type: "Barangay Clearance".to_string(),
            full_name: "Juan Dela Cruz".to_string(),
            purok: Some("Purok 3".to_string()),
            birthdate: None,
            user_email: "juan@example.com".to_string(),
            purpose: Some("Zika Outbreak Assistance".to_string()),
            requirements_details: None,
            payment_method: Some("GCash".to_string()),
            payment_reference_number: Some("REF-123".to_string()),
            requirements_json: requirements_json.map(str::to_string),
            status: "Pending".to_string(),
            rejection_reason: None,
            generated_path: None,
            hidden_from_history: false,
            date_requested: None,
        }
    }

    #[test]
    fn requirements_column_parses_or_errors_distinctly() {
        let empty = sample_application(None);
        assert!(empty.requirements_paths().unwrap().is_empty());

        let valid = sample_application(Some(r#"["/uploads/id.jpg","/uploads/proof.pdf"]"#));
        assert_eq!(valid.requirements_paths().unwrap().len(), 2);

        // corrupt column is a parse error, not an empty list
        let corrupt = sample_application(Some("not-json"));
        assert!(corrupt.requirements_paths().is_err());
    }

    #[test]
    fn search_covers_name_type_email_and_purpose() {
        let app = sample_application(None);
        let fields = app.search_fields();
        assert!(fields.contains(&"Juan Dela Cruz"));
        assert!(fields.contains(&"Barangay Clearance"));
        assert!(fields.contains(&"juan@example.com"));
        assert!(fields.contains(&"Zika Outbreak Assistance"));
    }
}
