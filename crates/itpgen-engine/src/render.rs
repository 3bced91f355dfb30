//! Markdown rendering
//!
//! The ITP becomes one table per section; the MOS becomes numbered headings
//! with objective, instruments, procedure and acceptance.

use crate::document::DocumentHeader;
use crate::itp::ItpDocument;
use crate::mos::MosDocument;
use std::fmt::{self, Display, Formatter};

const ITP_COLUMNS: [&str; 9] = [
    "No.",
    "Activity",
    "Test method",
    "Reference standard",
    "Acceptance criteria",
    "Verifying document",
    "Contractor",
    "Consultant",
    "Client",
];

/// Render an ITP as Markdown
#[must_use]
pub fn itp_markdown(doc: &ItpDocument) -> String {
    ItpMarkdown(doc).to_string()
}

/// Render a MOS as Markdown
#[must_use]
pub fn mos_markdown(doc: &MosDocument) -> String {
    MosMarkdown(doc).to_string()
}

struct ItpMarkdown<'a>(&'a ItpDocument);

struct MosMarkdown<'a>(&'a MosDocument);

/// Escape a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn write_header(f: &mut Formatter<'_>, header: &DocumentHeader) -> fmt::Result {
    writeln!(f, "# {}", header.title)?;
    writeln!(f)?;
    for (label, value) in [
        ("Project", &header.project_id),
        ("Customer", &header.customer_name),
        ("Location", &header.location),
        ("Client", &header.client),
        ("Consultant", &header.consultant),
        ("Status", &header.status),
        ("Revision", &header.revision),
    ] {
        if !value.is_empty() {
            writeln!(f, "- **{label}:** {value}")?;
        }
    }
    writeln!(f)
}

impl Display for ItpMarkdown<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        write_header(f, &doc.header)?;

        if doc.is_empty() {
            return writeln!(f, "_No activities selected._");
        }

        for section in &doc.sections {
            writeln!(
                f,
                "## {}. {} ({})",
                section.number, section.title, section.abbreviation
            )?;
            writeln!(f)?;
            writeln!(f, "| {} |", ITP_COLUMNS.join(" | "))?;
            writeln!(f, "|{}", "---|".repeat(ITP_COLUMNS.len()))?;
            for row in &section.rows {
                let cells = [
                    &row.number,
                    &row.activity,
                    &row.test_method,
                    &row.reference_standard,
                    &row.acceptance_criteria,
                    &row.verifying_document,
                    &row.responsibility.contractor,
                    &row.responsibility.consultant,
                    &row.responsibility.client,
                ]
                .map(|c| cell(c));
                writeln!(f, "| {} |", cells.join(" | "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for MosMarkdown<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        write_header(f, &doc.header)?;

        if doc.is_empty() {
            return writeln!(f, "_No activities selected._");
        }

        for section in &doc.sections {
            writeln!(
                f,
                "## {}. {} ({})",
                section.number, section.title, section.abbreviation
            )?;
            writeln!(f)?;
            for step in &section.steps {
                let body = &step.body;
                writeln!(f, "### {} {}", step.number, step.title)?;
                writeln!(f)?;
                writeln!(f, "**Objective:** {}", body.objective)?;
                writeln!(f)?;
                writeln!(f, "**Instruments:**")?;
                writeln!(f)?;
                for instrument in body.instruments {
                    writeln!(f, "- {instrument}")?;
                }
                writeln!(f)?;
                writeln!(f, "**Procedure:**")?;
                writeln!(f)?;
                for (i, line) in body.procedure.iter().enumerate() {
                    writeln!(f, "{}. {}", i + 1, line)?;
                }
                writeln!(f)?;
                writeln!(f, "**Acceptance:** {}", body.acceptance)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocumentConfig, ItpTemplate};
    use crate::numbering::assign;
    use crate::resolver::resolve;
    use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};
    use itpgen_project::{EquipmentSelection, Project};

    fn project() -> Project {
        Project::new("p1", "Acme").with_selection(
            EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr),
            EquipmentSelection::from_values(["CB", "Relay"]),
        )
    }

    #[test]
    fn itp_table_rows() {
        let project = project();
        let plan = assign(&resolve(&project));
        let doc = ItpDocument::assemble(
            &project,
            &plan,
            &DocumentConfig::default(),
            &ItpTemplate::default(),
        );
        let md = itp_markdown(&doc);

        assert!(md.starts_with("# Inspection and Test Plan\n"));
        assert!(md.contains("- **Customer:** Acme\n"));
        assert!(!md.contains("**Location:**"));
        assert!(md.contains("## 1. LV Switchgear (LV SWGR)\n"));
        assert!(md.contains("| 1.1 | Name plate details |"));
        assert!(md.contains("| 1.4 | Protection Relay |"));
        assert!(md.contains("| H | W | R |"));
        assert_eq!(md.matches("| 1.").count(), 4);
    }

    #[test]
    fn mos_headings_and_procedure() {
        let project = project();
        let plan = assign(&resolve(&project));
        let doc = MosDocument::assemble(&project, &plan, &DocumentConfig::default());
        let md = mos_markdown(&doc);

        assert!(md.starts_with("# Method of Statement\n"));
        assert!(md.contains("### 1.3 Circuit Breaker\n"));
        assert!(md.contains("**Procedure:**\n\n1. "));
        assert_eq!(md.matches("### ").count(), 4);
    }

    #[test]
    fn empty_documents_say_so() {
        let project = Project::new("p1", "Acme");
        let plan = assign(&resolve(&project));
        let doc = MosDocument::assemble(&project, &plan, &DocumentConfig::default());
        assert!(mos_markdown(&doc).ends_with("_No activities selected._\n"));
    }

    #[test]
    fn cells_are_escaped() {
        assert_eq!(cell("a|b\nc"), "a\\|b c");
    }
}
