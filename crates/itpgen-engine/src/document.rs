//! Header block shared by both documents

use itpgen_project::Project;
use serde::Serialize;

/// Title block printed above every document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    /// Document title
    pub title: String,
    /// Revision label
    pub revision: String,
    /// Project id
    pub project_id: String,
    /// Customer name
    pub customer_name: String,
    /// Site location
    pub location: String,
    /// Client
    pub client: String,
    /// Consultant
    pub consultant: String,
    /// Project status label
    pub status: String,
}

impl DocumentHeader {
    /// Build header for project
    #[must_use]
    pub fn for_project(
        project: &Project,
        title: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            revision: revision.into(),
            project_id: project.id.to_string(),
            customer_name: project.customer_name.clone(),
            location: project.location.clone(),
            client: project.client.clone(),
            consultant: project.consultant.clone(),
            status: project.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itpgen_project::ProjectStatus;

    #[test]
    fn header_copies_project_fields() {
        let mut project = Project::new("p1", "Acme");
        project.location = "Dubai".to_string();
        project.status = ProjectStatus::OnHold;

        let header = DocumentHeader::for_project(&project, "ITP", "01");
        assert_eq!(header.project_id, "p1");
        assert_eq!(header.location, "Dubai");
        assert_eq!(header.status, "On Hold");

        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["customerName"], "Acme");
    }
}
