//! # Render Error Types
//!
//! Error taxonomy for PDF export.
//!
//! ## Design
//! Rendering has exactly two ways to fail: the PDF library refuses the
//! document, or the filesystem refuses the file. Domain validation never
//! happens here; a [`Document`](quotegen_core::Document) handed to the
//! renderer is already assembled and totalled.

use thiserror::Error;

/// Errors that can occur during PDF rendering and placement.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing or renaming the output file failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF backend rejected the document.
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Convenience Result alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("I/O failure"));
    }

    #[test]
    fn test_pdf_error_display() {
        let err = RenderError::Pdf("font not embeddable".into());
        assert_eq!(err.to_string(), "PDF generation failed: font not embeddable");
    }
}
