use mime::Mime;

use crate::ingest::domain::ingest_error::IngestError;

/// How an uploaded image travels in the request body.
///
/// Resolved once from the declared content type; anything else is an
/// [`IngestError`] rather than a fallthrough.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestEncoding {
    /// The body is the encoded image itself (`image/*`).
    Image,
    /// The body is `multipart/form-data` split on `boundary`.
    Multipart { boundary: String },
}

impl RequestEncoding {
    pub fn resolve(content_type: Option<&str>) -> Result<Self, IngestError> {
        let raw = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .ok_or(IngestError::MissingContentType)?;

        let parsed: Mime = raw
            .parse()
            .map_err(|_| IngestError::UnsupportedContentType(raw.to_string()))?;

        if parsed.type_() == mime::IMAGE {
            return Ok(Self::Image);
        }

        if parsed.type_() == mime::MULTIPART && parsed.subtype() == mime::FORM_DATA {
            let boundary = parsed
                .get_param(mime::BOUNDARY)
                .map(|b| b.as_str().to_string())
                .filter(|b| !b.is_empty())
                .ok_or(IngestError::MissingBoundary)?;
            return Ok(Self::Multipart { boundary });
        }

        Err(IngestError::UnsupportedContentType(parsed.essence_str().to_string()))
    }
}
