//! PDF text string encoding.
//!
//! Field names (`/T`) and text values (`/V`) are PDF text strings: either
//! UTF-16BE with a byte order mark, or a single-byte encoding. Values we
//! write are plain ASCII literals when possible, UTF-16BE otherwise.

use lopdf::{Object, StringFormat};

const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Decode a PDF text string.
///
/// UTF-16BE is detected by its byte order mark. Anything else is read as
/// UTF-8 when valid, falling back to Windows-1252 (a superset of the
/// printable PDFDocEncoding range).
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&UTF16_BE_BOM) {
        let (text, _) = encoding_rs::UTF_16BE.decode_without_bom_handling(utf16);
        return text.into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

/// Encode text as a PDF string object.
pub fn encode_pdf_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = UTF16_BE_BOM.to_vec();
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
