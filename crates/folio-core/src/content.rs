//! Case-study records and the catalog they are looked up in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A client project shown in the case-study modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Identifier referenced by `data-case-study` controls
    pub id: String,
    /// Display title
    pub title: String,
    /// Problem statement
    pub problem: String,
    /// Solution narrative
    pub solution: String,
    /// Outcome statements, in display order
    pub outcomes: Vec<String>,
}

impl CaseStudy {
    /// Create a case study with no outcomes.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        problem: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            problem: problem.into(),
            solution: solution.into(),
            outcomes: Vec::new(),
        }
    }

    /// Append an outcome statement.
    #[must_use]
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcomes.push(outcome.into());
        self
    }
}

/// Immutable id → [`CaseStudy`] table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStudyCatalog {
    studies: HashMap<String, CaseStudy>,
    order: Vec<String>,
}

impl CaseStudyCatalog {
    /// Build a catalog from records. A later record with a repeated id
    /// replaces the earlier one.
    pub fn new(studies: impl IntoIterator<Item = CaseStudy>) -> Self {
        let mut catalog = Self::default();
        for study in studies {
            if !catalog.studies.contains_key(&study.id) {
                catalog.order.push(study.id.clone());
            }
            catalog.studies.insert(study.id.clone(), study);
        }
        catalog
    }

    /// The case studies published on the portfolio site.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            CaseStudy::new(
                "skybank",
                "SkyBank Mobile",
                "The existing banking app had a 60% drop-off rate during onboarding due to complex KYC requirements and outdated UI patterns. Users struggled to complete account setup, leading to poor conversion from download to active user.",
                "Redesigned the entire onboarding flow with progressive disclosure, breaking KYC into digestible steps with clear progress indicators. Introduced biometric verification and AI-powered document scanning to reduce manual input. Created a conversational chatbot for 24/7 support.",
            )
            .outcome("40% reduction in onboarding time")
            .outcome("75% increase in completion rate")
            .outcome("NPS score improved from 32 to 67")
            .outcome("Support tickets reduced by 50%"),
            CaseStudy::new(
                "pulse",
                "Pulse Analytics",
                "The SaaS dashboard was designed for power users but alienated newcomers. Key metrics were buried, tables weren't responsive, and the information architecture made simple tasks unnecessarily complex.",
                "Conducted comprehensive UX audit with user interviews. Restructured IA based on user mental models. Redesigned data visualization with progressive complexity\u{2014}simple summaries expandable to detailed views. Built responsive table components that adapt to any screen.",
            )
            .outcome("65% improvement in task completion")
            .outcome("45% reduction in time-to-insight")
            .outcome("Mobile usage increased 3x")
            .outcome("Customer churn reduced by 28%"),
            CaseStudy::new(
                "eternal",
                "Eternal Beauty Clinic",
                "The clinic's website felt dated and didn't inspire trust. The booking process required phone calls, and there was no clear service presentation. Competitor sites were winning potential clients.",
                "Created a premium, trust-building design with real testimonials, before/after galleries, and detailed service pages. Implemented seamless online booking with calendar integration. Optimized landing pages for specific treatments with clear CTAs.",
            )
            .outcome("3x increase in online bookings")
            .outcome("180% increase in organic traffic")
            .outcome("Bounce rate dropped from 65% to 28%")
            .outcome("Average session duration up 2.5x"),
            CaseStudy::new(
                "injoy",
                "iNJOY Self-Service",
                "Customers had to call support for basic account management tasks like SIM changes or complaint filing. This created support bottlenecks, long wait times, and customer frustration.",
                "Designed intuitive self-service flows for all major account management tasks. Created step-by-step wizards with inline help. Built a unified dashboard showing all active services, usage, and pending requests.",
            )
            .outcome("35% reduction in support calls")
            .outcome("60% of SIM changes now self-service")
            .outcome("Average resolution time cut in half")
            .outcome("Customer satisfaction up 40 points"),
        ])
    }

    /// Look up a case study by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CaseStudy> {
        self.studies.get(id)
    }

    /// Check whether an id is known.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.studies.contains_key(id)
    }

    /// Iterate case studies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CaseStudy> {
        self.order.iter().filter_map(|id| self.studies.get(id))
    }

    /// Ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Number of case studies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_four_studies() {
        let catalog = CaseStudyCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.ids(), ["skybank", "pulse", "eternal", "injoy"]);
    }

    #[test]
    fn test_builtin_skybank() {
        let catalog = CaseStudyCatalog::builtin();
        let study = catalog.get("skybank").unwrap();
        assert_eq!(study.title, "SkyBank Mobile");
        assert_eq!(study.outcomes.len(), 4);
        assert_eq!(study.outcomes[0], "40% reduction in onboarding time");
        assert_eq!(study.outcomes[3], "Support tickets reduced by 50%");
    }

    #[test]
    fn test_builtin_every_study_has_outcomes() {
        for study in CaseStudyCatalog::builtin().iter() {
            assert!(!study.title.is_empty(), "{} has no title", study.id);
            assert_eq!(study.outcomes.len(), 4, "{} outcome count", study.id);
        }
    }

    #[test]
    fn test_catalog_unknown_id() {
        let catalog = CaseStudyCatalog::builtin();
        assert!(catalog.get("does-not-exist").is_none());
        assert!(!catalog.contains("does-not-exist"));
    }

    #[test]
    fn test_catalog_duplicate_id_replaces() {
        let catalog = CaseStudyCatalog::new([
            CaseStudy::new("a", "First", "p", "s"),
            CaseStudy::new("b", "Other", "p", "s"),
            CaseStudy::new("a", "Second", "p", "s"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().title, "Second");
        assert_eq!(catalog.ids(), ["a", "b"]);
    }

    #[test]
    fn test_catalog_empty() {
        let catalog = CaseStudyCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_case_study_serde_roundtrip() {
        let study = CaseStudy::new("x", "X", "problem", "solution").outcome("one");
        let json = serde_json::to_string(&study).unwrap();
        let back: CaseStudy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, study);
    }
}
