//! Folio: accessible case-study modal for portfolio sites, WASM-first.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { CaseStudyModal } from './folio.js';
//!
//! async function main() {
//!     await init();
//!     const modal = CaseStudyModal.mount();
//!     modal.on_message((json) => console.log(JSON.parse(json)));
//!     modal.open('skybank');
//! }
//! ```
//!
//! # Native Usage
//!
//! ```ignore
//! use folio::widgets::ModalController;
//!
//! let mut modal = ModalController::new(my_document, my_engine);
//! modal.open("skybank");
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub use folio_core::*;
pub use folio_widgets as widgets;
pub use folio_yaml as yaml;

pub mod browser;

pub use browser::MountError;
#[cfg(target_arch = "wasm32")]
pub use browser::CaseStudyModal;
