//! Fixed file-extension to content-type mapping for skill resources.

use std::path::Path;

/// Content type for data that is neither recognized nor UTF-8 text.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for unrecognized files that hold UTF-8 text.
pub const PLAIN_TEXT: &str = "text/plain";

/// Every recognized extension and its content type.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("md", "text/markdown"),
    ("markdown", "text/markdown"),
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("json", "application/json"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("toml", "application/toml"),
    ("xml", "application/xml"),
    ("sh", "application/x-sh"),
    ("cs", "text/x-csharp"),
    ("liquid", "text/x-liquid"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("ico", "image/x-icon"),
    ("pdf", "application/pdf"),
    ("zip", "application/zip"),
];

/// Look up the content type registered for `path`'s extension.
pub fn content_type_for_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;
    CONTENT_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(extension))
        .map(|(_, content_type)| *content_type)
}

/// Content type for a file, falling back to sniffing `bytes` for text.
pub fn content_type_for(path: &Path, bytes: &[u8]) -> &'static str {
    if let Some(content_type) = content_type_for_extension(path) {
        return content_type;
    }

    if !bytes.contains(&0) && std::str::from_utf8(bytes).is_ok() {
        PLAIN_TEXT
    } else {
        OCTET_STREAM
    }
}

/// Whether content of this type is served as text.
pub fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || matches!(
            content_type,
            "application/json"
                | "application/yaml"
                | "application/toml"
                | "application/xml"
                | "application/x-sh"
                | "image/svg+xml"
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_case_insensitively() {
        assert_eq!(content_type_for(Path::new("logo.png"), b""), "image/png");
        assert_eq!(content_type_for(Path::new("LOGO.PNG"), b""), "image/png");
        assert_eq!(
            content_type_for(Path::new("refs/fields.md"), b""),
            "text/markdown"
        );
    }

    #[test]
    fn unknown_extensions_fall_back_by_content() {
        assert_eq!(content_type_for(Path::new("notes.rst"), b"plain words"), PLAIN_TEXT);
        assert_eq!(content_type_for(Path::new("Makefile"), b"all:\n"), PLAIN_TEXT);
        assert_eq!(
            content_type_for(Path::new("blob.bin"), &[0x00, 0x9f, 0x92]),
            OCTET_STREAM
        );
    }

    #[test]
    fn textual_types_cover_text_and_structured_formats() {
        assert!(is_textual("text/markdown"));
        assert!(is_textual("application/json"));
        assert!(is_textual("image/svg+xml"));
        assert!(!is_textual("image/png"));
        assert!(!is_textual(OCTET_STREAM));
    }
}
