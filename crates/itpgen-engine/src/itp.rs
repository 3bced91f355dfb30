//! Inspection and Test Plan assembly
//!
//! One row per numbered line. Every column other than number and activity
//! comes from the configured [`ItpTemplate`].

use crate::config::{DocumentConfig, ItpTemplate};
use crate::document::DocumentHeader;
use crate::numbering::{ActivityPlan, NumberedSection, ResolvedActivity};
use itpgen_project::Project;
use serde::Serialize;

/// Responsibility codes of one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Responsibility {
    /// Contractor
    pub contractor: String,
    /// Consultant
    pub consultant: String,
    /// Client
    pub client: String,
}

/// One ITP table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItpRow {
    /// `section.item`
    pub number: String,
    /// Activity label
    pub activity: String,
    /// Test method
    pub test_method: String,
    /// Reference standard
    pub reference_standard: String,
    /// Acceptance criteria
    pub acceptance_criteria: String,
    /// Verifying document
    pub verifying_document: String,
    /// Who holds, witnesses and reviews
    pub responsibility: Responsibility,
}

impl ItpRow {
    fn new(activity: &ResolvedActivity, template: &ItpTemplate) -> Self {
        let codes = &template.responsibility;
        Self {
            number: activity.numbering.to_string(),
            activity: activity.label().to_string(),
            test_method: template.test_method.clone(),
            reference_standard: template.reference_standard.clone(),
            acceptance_criteria: template.acceptance_criteria.clone(),
            verifying_document: template.verifying_document.clone(),
            responsibility: Responsibility {
                contractor: codes.contractor.clone(),
                consultant: codes.consultant.clone(),
                client: codes.client.clone(),
            },
        }
    }
}

/// One ITP section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItpSection {
    /// Section number
    pub number: u32,
    /// Section title
    pub title: String,
    /// Pair abbreviation
    pub abbreviation: String,
    /// Table rows
    pub rows: Vec<ItpRow>,
}

impl ItpSection {
    fn new(section: &NumberedSection, template: &ItpTemplate) -> Self {
        Self {
            number: section.number,
            title: section.title.clone(),
            abbreviation: section.abbreviation.to_string(),
            rows: section
                .activities
                .iter()
                .map(|a| ItpRow::new(a, template))
                .collect(),
        }
    }
}

/// Assembled Inspection and Test Plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItpDocument {
    /// Title block
    pub header: DocumentHeader,
    /// Sections in order
    pub sections: Vec<ItpSection>,
}

impl ItpDocument {
    /// Assemble from a numbered plan
    #[must_use]
    pub fn assemble(
        project: &Project,
        plan: &ActivityPlan,
        document: &DocumentConfig,
        template: &ItpTemplate,
    ) -> Self {
        Self {
            header: DocumentHeader::for_project(project, &document.itp_title, &document.revision),
            sections: plan
                .sections
                .iter()
                .map(|s| ItpSection::new(s, template))
                .collect(),
        }
    }

    /// All rows across sections
    pub fn rows(&self) -> impl Iterator<Item = &ItpRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    /// Check if there is nothing to inspect
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
