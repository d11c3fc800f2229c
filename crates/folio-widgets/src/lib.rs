//! Widget implementations for Folio.

pub mod modal;

pub use modal::{
    CloseReason, EventResponse, ModalClosed, ModalController, ModalMessage, ModalOpened,
    ModalPhase,
};
