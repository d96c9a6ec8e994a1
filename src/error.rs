//! Errors
//!
//! Two classes of failure exist:
//!
//! - [RenderError]: the document cannot be rendered at all; the render call
//!   returns no framebuffer
//! - [AttributeError]: a single shape attribute is unusable; the shape (or the
//!   attribute) is skipped, a warning is logged, and rendering continues
//!
//! [RenderError]: enum.RenderError.html
//! [AttributeError]: enum.AttributeError.html

use thiserror::Error;

/// Failure that aborts a whole render
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// Document size cannot be established, or the requested size is empty
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    /// A shape is missing a numeric attribute it cannot be drawn without
    #[error("malformed document: <{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

/// Failure local to one shape attribute
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttributeError {
    /// Path data could not be parsed past some point
    #[error("invalid path data: {0}")]
    PathData(String),
    /// Point lists need an even number of coordinates
    #[error("point list has an odd number of coordinates ({0})")]
    OddPointList(usize),
    /// Number list could not be parsed
    #[error("invalid number list: {0}")]
    Number(String),
    /// Color token could not be resolved
    #[error("invalid color `{0}`")]
    Color(String),
}
