//! Core types and traits for the Folio case-study modal.
//!
//! This crate provides the foundations the controller is built on:
//! - Content: [`CaseStudy`], [`CaseStudyCatalog`]
//! - Input: [`Event`], [`Key`], [`Modifiers`]
//! - Focus trapping: [`FocusTrap`]
//! - Transitions: [`Transition`], [`TransitionEngine`], [`EasingFunction`]
//! - The host seam: [`Document`]

mod config;
mod content;
mod document;
mod event;
mod focus;
mod motion;
mod transition;

pub use config::ModalConfig;
pub use content::{CaseStudy, CaseStudyCatalog};
pub use document::{Document, ElementId, Region, Slot};
pub use event::{Event, Key, Modifiers};
pub use focus::{FocusDirection, FocusTrap, TabOutcome};
pub use motion::{MotionPreference, REDUCED_MOTION_QUERY};
pub use transition::{
    EasingFunction, ModalPart, Track, Transition, TransitionEngine, TransitionTicket,
    TransitionTiming, VisualState,
};
