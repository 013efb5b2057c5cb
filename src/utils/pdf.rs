use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};
use stringcase::snake_case;

/// Applicant data stamped onto a certificate template.
pub struct CertificateData<'a> {
    pub application_id: i64,
    pub full_name: &'a str,
    pub document_type: &'a str,
    pub purok: Option<&'a str>,
    pub purpose: Option<&'a str>,
    pub issued_on: String,
}

#[derive(Debug)]
pub enum PdfRenderError {
    Parse(lopdf::Error),
    EmptyTemplate,
}

impl std::fmt::Display for PdfRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfRenderError::Parse(e) => write!(f, "Failed to process PDF template: {}", e),
            PdfRenderError::EmptyTemplate => write!(f, "Template has no pages"),
        }
    }
}

impl From<lopdf::Error> for PdfRenderError {
    fn from(e: lopdf::Error) -> Self {
        PdfRenderError::Parse(e)
    }
}

/// Stamps the applicant fields onto the first page of the template and
/// returns the finished document as bytes. The template itself is opaque;
/// field values are layered on top as text annotations.
pub fn render_certificate(
    template_bytes: &[u8],
    data: &CertificateData,
) -> Result<Vec<u8>, PdfRenderError> {
    let mut doc = Document::load_mem(template_bytes)?;

    let first_page = doc
        .get_pages()
        .into_iter()
        .next()
        .map(|(_, page_id)| page_id)
        .ok_or(PdfRenderError::EmptyTemplate)?;

    let mut lines: Vec<String> = vec![
        data.full_name.to_string(),
        data.document_type.to_string(),
    ];
    if let Some(purok) = data.purok {
        lines.push(format!("Purok: {}", purok));
    }
    if let Some(purpose) = data.purpose {
        lines.push(format!("Purpose: {}", purpose));
    }
    lines.push(format!("Issued on: {}", data.issued_on));
    lines.push(format!("Application No. {}", data.application_id));

    // stamp downward from the upper body of the page
    let mut y = 560.0;
    for line in &lines {
        let annot_id = build_text_annotation(&mut doc, line, 90.0, y);
        attach_annotation(&mut doc, first_page, annot_id)?;
        y -= 28.0;
    }

    let mut output = Vec::new();
    doc.save_to(&mut output).map_err(lopdf::Error::from)?;

    Ok(output)
}

pub fn generated_file_name(application_id: i64, document_type: &str, full_name: &str) -> String {
    format!(
        "{}_{}_{}.pdf",
        application_id,
        snake_case(document_type),
        snake_case(full_name)
    )
}

fn build_text_annotation(doc: &mut Document, text: &str, x: f32, y: f32) -> ObjectId {
    let mut annot = Dictionary::new();
    annot.set("Type", Object::Name(b"Annot".to_vec()));
    annot.set("Subtype", Object::Name(b"FreeText".to_vec()));
    annot.set(
        "Rect",
        Object::Array(vec![
            Object::Real(x),
            Object::Real(y),
            Object::Real(x + 420.0),
            Object::Real(y + 22.0),
        ]),
    );
    annot.set(
        "Contents",
        Object::String(text.as_bytes().to_vec(), StringFormat::Literal),
    );
    annot.set(
        "DA",
        Object::String(b"/Helv 12 Tf 0 0 0 rg".to_vec(), StringFormat::Literal),
    );

    doc.add_object(Object::Dictionary(annot))
}

fn attach_annotation(
    doc: &mut Document,
    page_id: ObjectId,
    annot_id: ObjectId,
) -> Result<(), PdfRenderError> {
    let page = doc.get_object_mut(page_id)?;

    if let Object::Dictionary(page_dict) = page {
        if let Ok(Object::Array(arr)) = page_dict.get_mut(b"Annots") {
            arr.push(Object::Reference(annot_id));
        } else {
            page_dict.set("Annots", Object::Array(vec![Object::Reference(annot_id)]));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    fn blank_template() -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        });
        if let Ok(page) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn sample_data() -> CertificateData<'static> {
        CertificateData {
            application_id: 42,
            full_name: "Juan Dela Cruz",
            document_type: "Barangay Clearance",
            purok: Some("Purok 3"),
            purpose: Some("Employment requirement"),
            issued_on: "2025-01-15".to_string(),
        }
    }

    #[test]
    fn rendered_output_is_a_loadable_pdf() {
        let output = render_certificate(&blank_template(), &sample_data()).unwrap();

        assert!(output.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn stamped_fields_survive_the_round_trip() {
        let output = render_certificate(&blank_template(), &sample_data()).unwrap();
        let doc = Document::load_mem(&output).unwrap();

        let page_id = doc.get_pages().into_values().next().unwrap();
        let page_dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let annots = page_dict.get(b"Annots").unwrap().as_array().unwrap();

        // name, type, purok, purpose, date, application number
        assert_eq!(annots.len(), 6);
    }

    #[test]
    fn corrupt_template_is_a_parse_error() {
        let result = render_certificate(b"definitely not a pdf", &sample_data());
        assert!(matches!(result, Err(PdfRenderError::Parse(_))));
    }

    #[test]
    fn file_name_is_derived_from_type_and_applicant() {
        assert_eq!(
            generated_file_name(42, "Barangay Clearance", "Juan Dela Cruz"),
            "42_barangay_clearance_juan_dela_cruz.pdf"
        );
    }
}
