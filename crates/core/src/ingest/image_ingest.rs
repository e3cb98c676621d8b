use image::DynamicImage;

use crate::ingest::domain::ingest_error::IngestError;
use crate::ingest::domain::request_encoding::RequestEncoding;
use crate::ingest::infrastructure::image_decoder::decode_image;
use crate::ingest::infrastructure::multipart_reader::read_form_field;
use crate::shared::constants::IMAGE_FORM_FIELD;

/// Turns a request body into a decoded image according to its content type.
///
/// The content type is checked before any decoding is attempted.
pub fn ingest(content_type: Option<&str>, body: &[u8]) -> Result<DynamicImage, IngestError> {
    match RequestEncoding::resolve(content_type)? {
        RequestEncoding::Image => decode_image(body),
        RequestEncoding::Multipart { boundary } => {
            let part = read_form_field(body, &boundary, IMAGE_FORM_FIELD)?;
            decode_image(&part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const BOUNDARY: &str = "----facemask";

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn form(name: &str, content: &[u8]) -> Vec<u8> {
        let mut out = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"face.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .into_bytes();
        out.extend_from_slice(content);
        out.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        out
    }

    fn multipart_ct() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    #[test]
    fn test_direct_image() {
        let img = ingest(Some("image/png"), &png(20, 10)).unwrap();
        assert_eq!((img.width(), img.height()), (20, 10));
    }

    #[test]
    fn test_declared_subtype_does_not_have_to_match() {
        let img = ingest(Some("image/jpeg"), &png(5, 5)).unwrap();
        assert_eq!(img.width(), 5);
    }

    #[test]
    fn test_multipart_image() {
        let img = ingest(Some(&multipart_ct()), &form("image", &png(8, 6))).unwrap();
        assert_eq!((img.width(), img.height()), (8, 6));
    }

    #[test]
    fn test_multipart_without_image_field() {
        let result = ingest(Some(&multipart_ct()), &form("file", &png(8, 6)));
        assert!(matches!(result, Err(IngestError::MissingImageField)));
    }

    #[test]
    fn test_multipart_image_field_not_an_image() {
        let result = ingest(Some(&multipart_ct()), &form("image", b"plain text"));
        assert!(matches!(result, Err(IngestError::Decode(_))));
    }

    #[test]
    fn test_multipart_empty_image_field() {
        let result = ingest(Some(&multipart_ct()), &form("image", b""));
        assert!(matches!(result, Err(IngestError::EmptyBody)));
    }

    #[test]
    fn test_text_plain_rejected_even_with_image_bytes() {
        let result = ingest(Some("text/plain"), &png(4, 4));
        assert!(matches!(result, Err(IngestError::UnsupportedContentType(_))));
    }

    #[test]
    fn test_corrupt_jpeg() {
        let result = ingest(Some("image/jpeg"), b"\xFF\xD8\xFF\xE0 corrupt");
        assert!(matches!(result, Err(IngestError::Decode(_))));
    }
}
