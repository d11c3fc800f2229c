#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
//! Testing harness for the Folio case-study modal.
//!
//! In-memory stand-ins for the browser: [`FakeDocument`] models the page
//! and [`ManualTransitions`] holds transitions until the test finishes them.
//! [`Harness`] wires both into a controller.
//!
//! ```ignore
//! use folio_test::Harness;
//!
//! let mut harness = Harness::new();
//! harness.click_trigger("skybank").complete_transitions();
//! harness.assert_open("skybank");
//! ```

mod dom;
mod harness;
mod transitions;

pub use dom::{ElementKind, FakeDocument};
pub use harness::Harness;
pub use transitions::ManualTransitions;
