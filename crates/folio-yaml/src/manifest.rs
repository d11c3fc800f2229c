//! Site manifest: modal tuning plus the case studies the site publishes.

use crate::error::ParseError;
use folio_core::{CaseStudy, CaseStudyCatalog, ModalConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root manifest structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Manifest format version
    #[serde(default = "default_version")]
    pub folio: String,
    /// Site name
    #[serde(default)]
    pub name: String,
    /// Modal configuration
    #[serde(default)]
    pub modal: ModalConfig,
    /// Case studies; the built-in set is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_studies: Option<Vec<CaseStudy>>,
}

fn default_version() -> String {
    "0.2".to_string()
}

impl Default for SiteManifest {
    fn default() -> Self {
        Self {
            folio: default_version(),
            name: String::new(),
            modal: ModalConfig::default(),
            case_studies: None,
        }
    }
}

impl SiteManifest {
    /// Parse and validate a manifest from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the case studies are
    /// invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the case-study list.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ParseError> {
        let Some(studies) = &self.case_studies else {
            return Ok(());
        };
        if studies.is_empty() {
            return Err(ParseError::Validation(
                "case_studies must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (index, study) in studies.iter().enumerate() {
            if study.id.is_empty() {
                return Err(ParseError::MissingField(format!("case_studies[{index}].id")));
            }
            if !is_slug(&study.id) {
                return Err(ParseError::InvalidValue {
                    field: format!("case_studies[{index}].id"),
                    message: format!("'{}' must be a lowercase slug", study.id),
                });
            }
            if study.title.trim().is_empty() {
                return Err(ParseError::MissingField(format!(
                    "case_studies[{index}].title"
                )));
            }
            if !seen.insert(study.id.as_str()) {
                return Err(ParseError::DuplicateId(study.id.clone()));
            }
        }
        Ok(())
    }

    /// Catalog to hand to the modal controller.
    #[must_use]
    pub fn catalog(&self) -> CaseStudyCatalog {
        self.case_studies.as_ref().map_or_else(CaseStudyCatalog::builtin, |studies| {
            CaseStudyCatalog::new(studies.iter().cloned())
        })
    }
}

fn is_slug(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
