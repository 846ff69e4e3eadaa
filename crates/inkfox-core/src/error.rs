//! Error types for InkFox

use thiserror::Error;

/// Errors raised while loading or validating a site configuration
#[derive(Error, Debug)]
pub enum SiteError {
    /// Site file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Site file is not valid JSON for the site schema
    #[error("Invalid site JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A section has an empty anchor id
    #[error("Section {0} has an empty id")]
    EmptySectionId(usize),

    /// Two sections share the same anchor id
    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    /// A section id is not a usable anchor (upper case or whitespace)
    #[error("Section id '{id}' is not an anchor; use '{expected}'")]
    SectionIdNotAnchor { id: String, expected: String },

    /// A section reuses the footer's anchor id
    #[error("Section id '{0}' is already used by the footer")]
    SectionIdUsedByFooter(String),

    /// A promotional item is missing a required display field
    #[error("Item {index} in section '{section}' has an empty {field}")]
    EmptyItemField {
        section: String,
        index: usize,
        field: &'static str,
    },
}

/// Errors raised by newsletter subscription
#[derive(Error, Debug)]
pub enum NewsletterError {
    /// The address failed validation and was never dispatched
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Mailing list storage failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored subscription record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for site loading
pub type SiteResult<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_field_error_names_section_and_index() {
        let err = SiteError::EmptyItemField {
            section: "books".to_string(),
            index: 2,
            field: "title",
        };
        assert_eq!(
            err.to_string(),
            "Item 2 in section 'books' has an empty title"
        );
    }

    #[test]
    fn not_anchor_error_suggests_slug() {
        let err = SiteError::SectionIdNotAnchor {
            id: "New Releases".to_string(),
            expected: "new-releases".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Section id 'New Releases' is not an anchor; use 'new-releases'"
        );
    }

    #[test]
    fn invalid_email_display() {
        let err = NewsletterError::InvalidEmail("missing '@'".to_string());
        assert_eq!(err.to_string(), "Invalid email: missing '@'");
    }
}
