//! Section and item numbering
//!
//! Every resolved pair becomes one top-level section. Sections are numbered
//! from 1 with no gaps. Inside a section the header checks take items
//! `.1` and `.2`; catalog activities follow from `.3` in catalog order.

use crate::resolver::Resolution;
use itpgen_catalog::{EquipmentPair, HeaderCheck, PlanItem, HEADER_CHECK_COUNT};
use serde::{Serialize, Serializer};
use std::fmt;

/// `section.item` number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numbering {
    /// Top-level section number, from 1
    pub section: u32,
    /// Item number within the section, from 1
    pub item: u32,
}

impl Numbering {
    /// Create numbering
    #[inline]
    #[must_use]
    pub const fn new(section: u32, item: u32) -> Self {
        Self { section, item }
    }

    /// Check if this item is one of the fixed header checks
    #[inline]
    #[must_use]
    pub const fn is_header(&self) -> bool {
        self.item <= HEADER_CHECK_COUNT
    }
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.item)
    }
}

impl Serialize for Numbering {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One numbered line of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedActivity {
    /// `section.item`
    pub numbering: Numbering,
    /// Pair abbreviation (`LV SWGR`)
    pub abbreviation: &'static str,
    /// Header check or catalog activity
    pub item: PlanItem,
}

impl ResolvedActivity {
    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.item.label()
    }
}

/// One numbered top-level section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedSection {
    /// Section number
    pub number: u32,
    /// Pair this section covers
    pub pair: EquipmentPair,
    /// Pair abbreviation
    pub abbreviation: &'static str,
    /// Section title (`LV Switchgear`)
    pub title: String,
    /// Header checks followed by matched activities
    pub activities: Vec<ResolvedActivity>,
}

impl NumberedSection {
    /// Catalog activities only, without header checks
    pub fn catalog_activities(&self) -> impl Iterator<Item = &ResolvedActivity> {
        self.activities.iter().filter(|a| !a.numbering.is_header())
    }
}

/// Numbered sections of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityPlan {
    /// Sections in order
    pub sections: Vec<NumberedSection>,
}

impl ActivityPlan {
    /// All lines of all sections
    pub fn activities(&self) -> impl Iterator<Item = &ResolvedActivity> {
        self.sections.iter().flat_map(|s| s.activities.iter())
    }

    /// Section by number
    #[must_use]
    pub fn section(&self, number: u32) -> Option<&NumberedSection> {
        self.sections.iter().find(|s| s.number == number)
    }

    /// Number of sections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the plan has no sections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Number a resolution
#[must_use]
pub fn assign(resolution: &Resolution) -> ActivityPlan {
    let mut sections = Vec::with_capacity(resolution.groups().len());
    let mut number = 0;

    for group in resolution.groups().iter().filter(|g| !g.is_empty()) {
        number += 1;
        let abbreviation = group.pair.abbreviation();

        let items = HeaderCheck::ALL
            .into_iter()
            .map(PlanItem::Header)
            .chain(group.entries.iter().map(|e| PlanItem::Activity(e.activity)));

        let mut item_number = 0;
        let activities = items
            .map(|item| {
                item_number += 1;
                ResolvedActivity {
                    numbering: Numbering::new(number, item_number),
                    abbreviation,
                    item,
                }
            })
            .collect();

        sections.push(NumberedSection {
            number,
            pair: group.pair,
            abbreviation,
            title: group.pair.title(),
            activities,
        });
    }

    ActivityPlan { sections }
}
