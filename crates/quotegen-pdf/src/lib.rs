//! # quotegen-pdf: PDF Export for Quotegen
//!
//! Renders assembled documents to single-page PDF files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quotegen Export Flow                             │
//! │                                                                         │
//! │  quotegen-core::Document (assembled, totalled)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   quotegen-pdf (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   render_to_bytes()  ← fixed-coordinate single-page layout     │   │
//! │  │   render()           ← bytes + atomic file placement           │   │
//! │  │   default_filename() ← "Quotation_QTN-XXXXXXXX.pdf"            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  complete .pdf on disk (never a partial file)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`render`] - Page layout and atomic file placement
//! - [`error`] - Render error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{RenderError, RenderResult};
pub use render::{default_filename, render, render_to_bytes};
