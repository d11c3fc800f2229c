//! YAML site manifest parser for Folio.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::SiteManifest;
