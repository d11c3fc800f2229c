//! Errors raised while binding the modal to a page.

use thiserror::Error;

/// Mount failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No global `window`
    #[error("no window available")]
    NoWindow,
    /// No `document` on the window
    #[error("no document available")]
    NoDocument,
    /// The overlay root is missing
    #[error("overlay '#{0}' not found")]
    MissingRoot(String),
    /// A required part of the overlay is missing
    #[error("overlay part '{0}' not found")]
    MissingPart(&'static str),
    /// An element has the wrong type
    #[error("element '{0}' is not an HTML element")]
    NotHtml(&'static str),
    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_error_display() {
        assert_eq!(MountError::NoWindow.to_string(), "no window available");
        assert_eq!(
            MountError::MissingRoot("case-study-modal".to_string()).to_string(),
            "overlay '#case-study-modal' not found"
        );
        assert_eq!(
            MountError::MissingPart(".modal__close").to_string(),
            "overlay part '.modal__close' not found"
        );
        assert_eq!(
            MountError::NotHtml(".modal__container").to_string(),
            "element '.modal__container' is not an HTML element"
        );
    }
}
