//! Browser runtime for the case-study modal.
//!
//! Binds [`folio_widgets::ModalController`] to the page through `web-sys`:
//! the overlay markup is found by class name, transitions run as CSS
//! transitions, and completion comes back through `setTimeout`.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod document;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod transitions;

// Cross-platform modules
pub mod error;
pub mod markup;

#[cfg(target_arch = "wasm32")]
pub use app::CaseStudyModal;
#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use transitions::CssTransitions;
pub use error::MountError;
