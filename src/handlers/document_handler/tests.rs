use super::*;
use crate::models::document::DocumentApplication;

pub fn sample_application(status: &str) -> DocumentApplication {
    DocumentApplication {
        id: 42,
        document_type: "Barangay Clearance".to_string(),
        full_name: "Juan Dela Cruz".to_string(),
        purok: Some("Purok 3".to_string()),
        birthdate: None,
        user_email: "juan@example.com".to_string(),
        purpose: Some("Employment requirement".to_string()),
        requirements_details: Some("Valid ID attached".to_string()),
        payment_method: Some("GCash".to_string()),
        payment_reference_number: Some("REF-2024-001".to_string()),
        requirements_json: Some(r#"["/uploads/id.jpg"]"#.to_string()),
        status: status.to_string(),
        rejection_reason: None,
        generated_path: None,
        hidden_from_history: false,
        date_requested: None,
    }
}

#[tokio::test]
async fn transition_conflicts_map_to_409() {
    let (status, _) = transition_failure(TransitionError::Terminal {
        current: DocumentStatus::Completed,
    });
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = transition_failure(TransitionError::NotPermitted {
        from: DocumentStatus::Approved,
        to: DocumentStatus::Rejected,
    });
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn transition_input_errors_map_to_422() {
    let (status, _) = transition_failure(TransitionError::MissingRejectionReason);
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = transition_failure(TransitionError::ApprovalRequiresGeneration);
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = transition_failure(TransitionError::UnknownStatus("Archived".into()));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.0.message.contains("Archived"));
}

#[tokio::test]
async fn rejecting_without_a_reason_is_refused_before_any_write() {
    // the guard the handler consults before issuing the UPDATE
    let current: DocumentStatus = sample_application("Pending").status().unwrap();
    let result = validate_status_update(current, DocumentStatus::Rejected, Some(""));
    assert_eq!(result, Err(TransitionError::MissingRejectionReason));
}

#[tokio::test]
async fn responses_preserve_the_frontend_contract() {
    let responses = to_responses(vec![sample_application("Pending")]).unwrap();
    let json = serde_json::to_value(&responses[0]).unwrap();

    assert_eq!(json["fullName"], "Juan Dela Cruz");
    assert_eq!(json["documentType"], "Barangay Clearance");
    assert_eq!(json["status"], "Pending");
    assert_eq!(json["requirementsFilePaths"][0], "/uploads/id.jpg");
}

#[tokio::test]
async fn corrupt_requirements_column_fails_the_listing() {
    let mut application = sample_application("Pending");
    application.requirements_json = Some("{broken".to_string());

    assert!(to_responses(vec![application]).is_err());
}

#[tokio::test]
async fn csv_export_includes_header_and_rows() {
    let csv_bytes = export_csv(&[
        sample_application("Pending"),
        sample_application("Completed"),
    ])
    .unwrap();
    let text = String::from_utf8(csv_bytes).unwrap();

    assert!(text.starts_with("ID,Applicant,Document Type"));
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Juan Dela Cruz"));
}

#[tokio::test]
async fn xlsx_export_produces_a_workbook() {
    let bytes = export_xlsx(&[sample_application("Pending")]).unwrap();
    // xlsx files are zip containers
    assert_eq!(&bytes[0..2], b"PK");
}

#[tokio::test]
async fn export_rows_carry_the_rejection_reason() {
    let mut application = sample_application("Rejected");
    application.rejection_reason = Some("Incomplete requirements".to_string());

    let row = export_row(&application);
    assert_eq!(row[3], "Rejected");
    assert_eq!(row[6], "Incomplete requirements");
}

#[tokio::test]
async fn generated_files_are_named_after_the_application() {
    let name = pdf::generated_file_name(42, "Barangay Clearance", "Juan Dela Cruz");
    assert_eq!(name, "42_barangay_clearance_juan_dela_cruz.pdf");
}
