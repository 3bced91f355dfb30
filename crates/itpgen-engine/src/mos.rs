//! Method of Statement assembly
//!
//! One step per numbered line, carrying the narrative body of its plan item.
//! Body lookup is total, so every line produces a step.

use crate::config::DocumentConfig;
use crate::document::DocumentHeader;
use crate::numbering::{ActivityPlan, NumberedSection, ResolvedActivity};
use itpgen_catalog::MosBody;
use itpgen_project::Project;
use serde::Serialize;

/// One MOS step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MosStep {
    /// `section.item`
    pub number: String,
    /// Step heading
    pub title: &'static str,
    /// Narrative body
    pub body: MosBody,
}

impl From<&ResolvedActivity> for MosStep {
    fn from(activity: &ResolvedActivity) -> Self {
        Self {
            number: activity.numbering.to_string(),
            title: activity.label(),
            body: activity.item.mos_body(),
        }
    }
}

/// One MOS section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MosSection {
    /// Section number
    pub number: u32,
    /// Section title
    pub title: String,
    /// Pair abbreviation
    pub abbreviation: &'static str,
    /// Steps in order
    pub steps: Vec<MosStep>,
}

impl From<&NumberedSection> for MosSection {
    fn from(section: &NumberedSection) -> Self {
        Self {
            number: section.number,
            title: section.title.clone(),
            abbreviation: section.abbreviation,
            steps: section.activities.iter().map(MosStep::from).collect(),
        }
    }
}

/// Assembled Method of Statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MosDocument {
    /// Title block
    pub header: DocumentHeader,
    /// Sections in order
    pub sections: Vec<MosSection>,
}

impl MosDocument {
    /// Assemble from a numbered plan
    #[must_use]
    pub fn assemble(project: &Project, plan: &ActivityPlan, document: &DocumentConfig) -> Self {
        Self {
            header: DocumentHeader::for_project(project, &document.mos_title, &document.revision),
            sections: plan.sections.iter().map(MosSection::from).collect(),
        }
    }

    /// All steps across sections
    pub fn steps(&self) -> impl Iterator<Item = &MosStep> {
        self.sections.iter().flat_map(|s| s.steps.iter())
    }

    /// Check if there is nothing to describe
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::assign;
    use crate::resolver::resolve;
    use itpgen_catalog::{EquipmentClass, EquipmentPair, HeaderCheck, Voltage};
    use itpgen_project::EquipmentSelection;

    #[test]
    fn steps_carry_bodies() {
        let project = Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Mv, EquipmentClass::Cable),
            EquipmentSelection::from_values(["VLF", "IR"]),
        );
        let plan = assign(&resolve(&project));
        let doc = MosDocument::assemble(&project, &plan, &DocumentConfig::default());

        assert_eq!(doc.header.title, "Method of Statement");
        let steps: Vec<_> = doc.steps().collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].number, "1.1");
        assert_eq!(steps[0].body, HeaderCheck::NamePlate.mos_body());
        assert_eq!(steps[2].number, "1.3");
        assert!(steps
            .iter()
            .all(|s| !s.body.objective.is_empty() && !s.body.procedure.is_empty()));
    }

    #[test]
    fn step_serializes_body_fields() {
        let project = Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Lv, EquipmentClass::Rmu),
            EquipmentSelection::from_values(["LBS"]),
        );
        let plan = assign(&resolve(&project));
        let doc = MosDocument::assemble(&project, &plan, &DocumentConfig::default());

        let json = serde_json::to_value(&doc).unwrap();
        let step = &json["sections"][0]["steps"][2];
        assert_eq!(step["number"], "1.3");
        assert!(step["body"]["instruments"].is_array());
        assert_eq!(json["sections"][0]["abbreviation"], "LV RMU");
    }
}
