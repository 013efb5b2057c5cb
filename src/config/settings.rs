use std::env;

use crate::models::document::DocumentType;

/// Runtime configuration gathered once at startup and shared through an
/// `Extension`. Anything environment-specific (ports, origins, directories,
/// code lifetimes) lives here instead of in module-level constants.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_port: u16,
    pub cors_origin: String,
    pub upload_dir: String,
    pub generated_dir: String,
    pub template_dir: String,
    pub otp_expiry_minutes: i64,
    pub templates: TemplateRegistry,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let app_port = env::var("APP_PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(5000);

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let generated_dir = env::var("GENERATED_DIR").unwrap_or_else(|_| "generated".to_string());
        let template_dir = env::var("TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());

        let otp_expiry_minutes = env::var("OTP_EXPIRY_MINUTES")
            .ok()
            .and_then(|m| m.parse::<i64>().ok())
            .unwrap_or(15);

        AppConfig {
            app_port,
            cors_origin,
            upload_dir,
            generated_dir,
            template_dir,
            otp_expiry_minutes,
            templates: TemplateRegistry::default(),
        }
    }
}

/// Lookup table mapping each document type to the PDF templates an admin may
/// generate from. Approval offers only the templates registered for the
/// application's own type.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    entries: Vec<(DocumentType, String)>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        TemplateRegistry {
            entries: vec![
                (
                    DocumentType::BarangayClearance,
                    "barangay_clearance_template.pdf".to_string(),
                ),
                (
                    DocumentType::CertificateOfIndigency,
                    "certificate_of_indigency.pdf".to_string(),
                ),
                (
                    DocumentType::BusinessPermitEndorsement,
                    "business_permit_endorsement_template.pdf".to_string(),
                ),
                (
                    DocumentType::CertificateOfResidency,
                    "certificate_of_residency_template.pdf".to_string(),
                ),
            ],
        }
    }
}

impl TemplateRegistry {
    pub fn templates_for(&self, document_type: DocumentType) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(kind, _)| *kind == document_type)
            .map(|(_, file)| file.as_str())
            .collect()
    }

    pub fn is_registered(&self, document_type: DocumentType, file_name: &str) -> bool {
        self.entries
            .iter()
            .any(|(kind, file)| *kind == document_type && file == file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_filters_templates_by_document_type() {
        let registry = TemplateRegistry::default();

        let clearance = registry.templates_for(DocumentType::BarangayClearance);
        assert_eq!(clearance, vec!["barangay_clearance_template.pdf"]);

        // A template registered for another type is never offered
        assert!(!registry.is_registered(
            DocumentType::CertificateOfIndigency,
            "barangay_clearance_template.pdf"
        ));
        assert!(registry.is_registered(
            DocumentType::CertificateOfIndigency,
            "certificate_of_indigency.pdf"
        ));
    }
}
