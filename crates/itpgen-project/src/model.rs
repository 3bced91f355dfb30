//! Project data model
//!
//! Defines the persisted project record and the inputs used to create,
//! patch and filter it. The wire shape is camelCase JSON with the id under
//! `_id`; equipment selections accept the voltage-prefixed stored keys
//! (`lvSwgr`, `evTrafo`, ...) as well as the plain class keys.

use crate::error::ModelError;
use chrono::{DateTime, Utc};
use itpgen_catalog::{EquipmentClass, EquipmentPair, Voltage};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Unique project identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate new identifier (ULID for sortability)
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Borrow as string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Being prepared
    #[default]
    Draft,
    /// In progress
    Active,
    /// Finished
    Completed,
    /// Paused
    #[serde(rename = "On Hold", alias = "OnHold")]
    OnHold,
}

impl ProjectStatus {
    /// Display string, matching the stored value
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(ProjectStatus::Draft),
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "onhold" => Ok(ProjectStatus::OnHold),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// One chosen sub-activity in a selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSelectionEntry")]
pub struct SelectionEntry {
    /// Catalog value
    pub value: String,
    /// Display label as stored with the selection
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl SelectionEntry {
    /// Create entry with value only
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: String::new(),
        }
    }

    /// With display label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Stored entries are either `{value, label}` objects or bare strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelectionEntry {
    Value(String),
    Entry {
        value: String,
        #[serde(default)]
        label: String,
    },
}

impl From<RawSelectionEntry> for SelectionEntry {
    fn from(raw: RawSelectionEntry) -> Self {
        match raw {
            RawSelectionEntry::Value(value) => Self::new(value),
            RawSelectionEntry::Entry { value, label } => Self { value, label },
        }
    }
}

/// Ordered set of chosen sub-activities for one (voltage, class) pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentSelection(Vec<SelectionEntry>);

impl EquipmentSelection {
    /// Create empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build selection from bare values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(SelectionEntry::new).collect())
    }

    /// Append entry
    #[inline]
    pub fn push(&mut self, entry: SelectionEntry) {
        self.0.push(entry);
    }

    /// Entries in stored order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.0.iter()
    }

    /// Values in stored order
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.value.as_str())
    }

    /// Check whether value was selected
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values().any(|v| v == value)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SelectionEntry> for EquipmentSelection {
    fn from_iter<T: IntoIterator<Item = SelectionEntry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Equipment selections of one voltage level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoltageOptions {
    /// Switchgear selection
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "evSwgr",
        alias = "hvSwgr",
        alias = "mvSwgr",
        alias = "lvSwgr"
    )]
    pub swgr: EquipmentSelection,
    /// Transformer selection
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "evTrafo",
        alias = "hvTrafo",
        alias = "mvTrafo",
        alias = "lvTrafo"
    )]
    pub trafo: EquipmentSelection,
    /// Cable selection
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "evCable",
        alias = "hvCable",
        alias = "mvCable",
        alias = "lvCable"
    )]
    pub cable: EquipmentSelection,
    /// Ring main unit selection
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "evRmu",
        alias = "hvRmu",
        alias = "mvRmu",
        alias = "lvRmu"
    )]
    pub rmu: EquipmentSelection,
}

impl VoltageOptions {
    /// Selection for class
    #[inline]
    #[must_use]
    pub fn selection(&self, class: EquipmentClass) -> &EquipmentSelection {
        match class {
            EquipmentClass::Swgr => &self.swgr,
            EquipmentClass::Trafo => &self.trafo,
            EquipmentClass::Cable => &self.cable,
            EquipmentClass::Rmu => &self.rmu,
        }
    }

    /// Mutable selection for class
    #[inline]
    pub fn selection_mut(&mut self, class: EquipmentClass) -> &mut EquipmentSelection {
        match class {
            EquipmentClass::Swgr => &mut self.swgr,
            EquipmentClass::Trafo => &mut self.trafo,
            EquipmentClass::Cable => &mut self.cable,
            EquipmentClass::Rmu => &mut self.rmu,
        }
    }

    /// Check if no class has a selection
    #[must_use]
    pub fn is_empty(&self) -> bool {
        EquipmentClass::ALL
            .iter()
            .all(|&class| self.selection(class).is_empty())
    }
}

/// Persisted project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: ProjectId,
    /// Customer name
    pub customer_name: String,
    /// Site location
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Client organisation
    #[serde(default, deserialize_with = "null_as_default")]
    pub client: String,
    /// Consultant organisation
    #[serde(default, deserialize_with = "null_as_default")]
    pub consultant: String,
    /// Lifecycle status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProjectStatus,
    /// Extra high voltage selections
    #[serde(default, deserialize_with = "null_as_default")]
    pub ev_options: VoltageOptions,
    /// High voltage selections
    #[serde(default, deserialize_with = "null_as_default")]
    pub hv_options: VoltageOptions,
    /// Medium voltage selections
    #[serde(default, deserialize_with = "null_as_default")]
    pub mv_options: VoltageOptions,
    /// Low voltage selections
    #[serde(default, deserialize_with = "null_as_default")]
    pub lv_options: VoltageOptions,
    /// Creation time, set by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time, set by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create project with empty selections
    #[must_use]
    pub fn new(id: impl Into<ProjectId>, customer_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            location: String::new(),
            client: String::new(),
            consultant: String::new(),
            status: ProjectStatus::default(),
            ev_options: VoltageOptions::default(),
            hv_options: VoltageOptions::default(),
            mv_options: VoltageOptions::default(),
            lv_options: VoltageOptions::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Option group for voltage
    #[inline]
    #[must_use]
    pub fn options(&self, voltage: Voltage) -> &VoltageOptions {
        match voltage {
            Voltage::Ev => &self.ev_options,
            Voltage::Hv => &self.hv_options,
            Voltage::Mv => &self.mv_options,
            Voltage::Lv => &self.lv_options,
        }
    }

    /// Mutable option group for voltage
    #[inline]
    pub fn options_mut(&mut self, voltage: Voltage) -> &mut VoltageOptions {
        match voltage {
            Voltage::Ev => &mut self.ev_options,
            Voltage::Hv => &mut self.hv_options,
            Voltage::Mv => &mut self.mv_options,
            Voltage::Lv => &mut self.lv_options,
        }
    }

    /// Selection for pair
    #[inline]
    #[must_use]
    pub fn selection(&self, pair: EquipmentPair) -> &EquipmentSelection {
        self.options(pair.voltage).selection(pair.class)
    }

    /// Replace selection for pair
    #[must_use]
    pub fn with_selection(mut self, pair: EquipmentPair, selection: EquipmentSelection) -> Self {
        *self.options_mut(pair.voltage).selection_mut(pair.class) = selection;
        self
    }
}

/// Input for creating a project
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Customer name (required)
    pub customer_name: String,
    /// Site location
    #[serde(default)]
    pub location: String,
    /// Client organisation
    #[serde(default)]
    pub client: String,
    /// Consultant organisation
    #[serde(default)]
    pub consultant: String,
    /// Initial status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Extra high voltage selections
    #[serde(default)]
    pub ev_options: VoltageOptions,
    /// High voltage selections
    #[serde(default)]
    pub hv_options: VoltageOptions,
    /// Medium voltage selections
    #[serde(default)]
    pub mv_options: VoltageOptions,
    /// Low voltage selections
    #[serde(default)]
    pub lv_options: VoltageOptions,
}

impl NewProject {
    /// Start with customer name
    #[inline]
    #[must_use]
    pub fn new(customer_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            ..Self::default()
        }
    }

    /// With location
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// With client
    #[inline]
    #[must_use]
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = client.into();
        self
    }

    /// With consultant
    #[inline]
    #[must_use]
    pub fn with_consultant(mut self, consultant: impl Into<String>) -> Self {
        self.consultant = consultant.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// With selection for pair
    #[must_use]
    pub fn with_selection(mut self, pair: EquipmentPair, selection: EquipmentSelection) -> Self {
        let options = match pair.voltage {
            Voltage::Ev => &mut self.ev_options,
            Voltage::Hv => &mut self.hv_options,
            Voltage::Mv => &mut self.mv_options,
            Voltage::Lv => &mut self.lv_options,
        };
        *options.selection_mut(pair.class) = selection;
        self
    }

    /// Check required fields
    ///
    /// # Errors
    /// Returns [`ModelError::MissingCustomerName`] for a blank customer
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.customer_name.trim().is_empty() {
            return Err(ModelError::MissingCustomerName);
        }
        Ok(())
    }

    /// Materialise into a stored project
    #[must_use]
    pub fn into_project(self, id: ProjectId, now: DateTime<Utc>) -> Project {
        Project {
            id,
            customer_name: self.customer_name,
            location: self.location,
            client: self.client,
            consultant: self.consultant,
            status: self.status,
            ev_options: self.ev_options,
            hv_options: self.hv_options,
            mv_options: self.mv_options,
            lv_options: self.lv_options,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    /// New customer name
    pub customer_name: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New client
    pub client: Option<String>,
    /// New consultant
    pub consultant: Option<String>,
    /// New status
    pub status: Option<ProjectStatus>,
    /// Replacement EV option group
    pub ev_options: Option<VoltageOptions>,
    /// Replacement HV option group
    pub hv_options: Option<VoltageOptions>,
    /// Replacement MV option group
    pub mv_options: Option<VoltageOptions>,
    /// Replacement LV option group
    pub lv_options: Option<VoltageOptions>,
}

impl ProjectPatch {
    /// Create empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status
    #[inline]
    #[must_use]
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set customer name
    #[inline]
    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Replace option group for voltage
    #[must_use]
    pub fn options(mut self, voltage: Voltage, options: VoltageOptions) -> Self {
        let slot = match voltage {
            Voltage::Ev => &mut self.ev_options,
            Voltage::Hv => &mut self.hv_options,
            Voltage::Mv => &mut self.mv_options,
            Voltage::Lv => &mut self.lv_options,
        };
        *slot = Some(options);
        self
    }

    /// Check if patch changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check patched fields
    ///
    /// # Errors
    /// Returns [`ModelError::MissingCustomerName`] when the patch blanks the customer
    pub fn validate(&self) -> Result<(), ModelError> {
        if matches!(&self.customer_name, Some(name) if name.trim().is_empty()) {
            return Err(ModelError::MissingCustomerName);
        }
        Ok(())
    }

    /// Apply to project
    pub fn apply(self, project: &mut Project) {
        if let Some(v) = self.customer_name {
            project.customer_name = v;
        }
        if let Some(v) = self.location {
            project.location = v;
        }
        if let Some(v) = self.client {
            project.client = v;
        }
        if let Some(v) = self.consultant {
            project.consultant = v;
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = self.ev_options {
            project.ev_options = v;
        }
        if let Some(v) = self.hv_options {
            project.hv_options = v;
        }
        if let Some(v) = self.mv_options {
            project.mv_options = v;
        }
        if let Some(v) = self.lv_options {
            project.lv_options = v;
        }
    }
}

/// Filter for listing projects
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    /// Only projects with this status
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring of the customer name
    pub customer: Option<String>,
}

impl ProjectFilter {
    /// Match everything
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// With customer substring
    #[inline]
    #[must_use]
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// Check if project matches
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if self.status.is_some_and(|s| s != project.status) {
            return false;
        }
        match &self.customer {
            Some(q) => project
                .customer_name
                .to_lowercase()
                .contains(&q.to_lowercase()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lv_swgr() -> EquipmentPair {
        EquipmentPair::new(Voltage::Lv, EquipmentClass::Swgr)
    }

    #[test]
    fn deserializes_stored_document() {
        let doc = json!({
            "_id": "65f0c0ffee",
            "customerName": "Acme Utilities",
            "location": "Dubai",
            "status": "On Hold",
            "lvOptions": {
                "lvSwgr": [{"value": "CB", "label": "Circuit Breaker"}, {"value": "Relay"}]
            },
            "hvOptions": { "hvTrafo": ["IR", "WR"] }
        });

        let project: Project = serde_json::from_value(doc).unwrap();
        assert_eq!(project.id.as_str(), "65f0c0ffee");
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(
            project.selection(lv_swgr()).values().collect::<Vec<_>>(),
            vec!["CB", "Relay"]
        );
        assert_eq!(
            project.selection(lv_swgr()).iter().next().unwrap().label,
            "Circuit Breaker"
        );
        assert_eq!(project.hv_options.trafo.len(), 2);
        assert!(project.ev_options.is_empty());
        assert!(project.created_at.is_none());
    }

    #[test]
    fn null_groups_and_selections_are_empty() {
        let doc = json!({
            "_id": "p1",
            "customerName": "Acme",
            "location": null,
            "status": null,
            "evOptions": null,
            "lvOptions": { "lvSwgr": null, "lvCable": ["IR"] }
        });

        let project: Project = serde_json::from_value(doc).unwrap();
        assert!(project.ev_options.is_empty());
        assert!(project.selection(lv_swgr()).is_empty());
        assert_eq!(project.lv_options.cable.len(), 1);
        assert_eq!(project.location, "");
        assert_eq!(project.status, ProjectStatus::Draft);
    }

    #[test]
    fn serializes_plain_class_keys() {
        let project = Project::new("p1", "Acme")
            .with_selection(lv_swgr(), EquipmentSelection::from_values(["CB"]));
        let json = serde_json::to_value(&project).unwrap();

        assert_eq!(json["_id"], "p1");
        assert_eq!(json["customerName"], "Acme");
        assert_eq!(json["status"], "Draft");
        assert_eq!(json["lvOptions"]["swgr"][0]["value"], "CB");
        assert!(json.get("createdAt").is_none());

        let back: Project = serde_json::from_value(json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn status_parsing() {
        assert_eq!("on hold".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("ON_HOLD".parse::<ProjectStatus>().unwrap(), ProjectStatus::OnHold);
        assert_eq!("Active".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert_eq!(
            "archived".parse::<ProjectStatus>().unwrap_err(),
            ModelError::UnknownStatus("archived".to_string())
        );
        assert_eq!(ProjectStatus::OnHold.to_string(), "On Hold");
    }

    #[test]
    fn new_project_validation() {
        assert_eq!(
            NewProject::new("  ").validate(),
            Err(ModelError::MissingCustomerName)
        );
        assert!(NewProject::new("Acme").validate().is_ok());
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut project = Project::new("p1", "Acme");
        project.location = "Doha".to_string();

        let mut lv = VoltageOptions::default();
        lv.swgr = EquipmentSelection::from_values(["CB"]);
        let patch = ProjectPatch::new()
            .status(ProjectStatus::Active)
            .options(Voltage::Lv, lv);
        assert!(!patch.is_empty());
        patch.apply(&mut project);

        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.location, "Doha");
        assert!(project.selection(lv_swgr()).contains("CB"));
        assert!(ProjectPatch::new().is_empty());
        assert!(ProjectPatch::new().customer_name("").validate().is_err());
    }

    #[test]
    fn filter_matches() {
        let mut project = Project::new("p1", "Acme Utilities");
        project.status = ProjectStatus::Active;

        assert!(ProjectFilter::all().matches(&project));
        assert!(ProjectFilter::all().with_customer("acme").matches(&project));
        assert!(!ProjectFilter::all().with_customer("globex").matches(&project));
        assert!(ProjectFilter::all()
            .with_status(ProjectStatus::Active)
            .matches(&project));
        assert!(!ProjectFilter::all()
            .with_status(ProjectStatus::Draft)
            .matches(&project));
    }
}
