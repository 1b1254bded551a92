//! Documents domain - user-owned PDF study documents.

pub mod models;

use serde::Deserialize;

use crate::common::CourseId;
pub use models::{Document, NewDocument};

/// Request body for registering an uploaded document.
///
/// Fields are optional here so missing values produce validation messages
/// rather than deserialization errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentInput {
    pub title: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub course_id: Option<String>,
}

impl CreateDocumentInput {
    /// Validate, returning the first failure message.
    pub fn validate(self) -> Result<NewDocument, String> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or("Title is required")?;

        let file_url = self
            .file_url
            .filter(|u| is_absolute_url(u))
            .ok_or("Invalid file URL")?;

        let file_type = self.file_type.ok_or("File type is required")?;

        let course_id = self
            .course_id
            .map(|id| CourseId::parse(&id).map_err(|_| "Invalid course ID"))
            .transpose()?;

        Ok(NewDocument {
            title,
            file_url,
            file_type,
            course_id,
        })
    }
}

fn is_absolute_url(raw: &str) -> bool {
    url::Url::parse(raw).map(|u| u.has_host()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateDocumentInput {
        CreateDocumentInput {
            title: Some("Organic Chemistry Notes".into()),
            file_url: Some("https://utfs.io/f/abc123.pdf".into()),
            file_type: Some("application/pdf".into()),
            course_id: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        let doc = valid().validate().unwrap();
        assert_eq!(doc.title, "Organic Chemistry Notes");
        assert_eq!(doc.course_id, None);
    }

    #[test]
    fn blank_title_is_rejected_first() {
        let input = CreateDocumentInput {
            title: Some("   ".into()),
            file_url: Some("nope".into()),
            ..valid()
        };
        assert_eq!(input.validate().unwrap_err(), "Title is required");
    }

    #[test]
    fn relative_or_malformed_urls_are_rejected() {
        for bad in ["not a url", "/uploads/a.pdf", "mailto:someone@example.com"] {
            let input = CreateDocumentInput {
                file_url: Some(bad.into()),
                ..valid()
            };
            assert_eq!(input.validate().unwrap_err(), "Invalid file URL", "{}", bad);
        }
    }

    #[test]
    fn missing_file_type_is_rejected() {
        let input = CreateDocumentInput {
            file_type: None,
            ..valid()
        };
        assert_eq!(input.validate().unwrap_err(), "File type is required");
    }

    #[test]
    fn course_id_must_be_uuid() {
        let bad = CreateDocumentInput {
            course_id: Some("chem-101".into()),
            ..valid()
        };
        assert_eq!(bad.validate().unwrap_err(), "Invalid course ID");

        let id = CourseId::new();
        let good = CreateDocumentInput {
            course_id: Some(id.to_string()),
            ..valid()
        };
        assert_eq!(good.validate().unwrap().course_id, Some(id));
    }
}
