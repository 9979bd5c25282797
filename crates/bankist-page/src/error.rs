//! Page errors

use bankist_dom::DomError;
use bankist_html::ParseError;

/// Errors raised while attaching behaviors or handling events.
///
/// All of them point at a page whose markup does not have the structure
/// the behaviors expect.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Missing element: {selector}")]
    MissingElement { selector: String },

    #[error("Slider has no slides matching {selector}")]
    EmptySlider { selector: String },

    #[error("Invalid root margin: {0}")]
    InvalidRootMargin(String),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl PageError {
    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        PageError::MissingElement { selector: selector.into() }
    }
}
