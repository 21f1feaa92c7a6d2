// crates/katottg-core/src/model/domain.rs
use crate::raw::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settlement type labels as the consuming UI displays them.
///
/// A closed mapping from registry categories; keeping it in one enum means
/// the vocabulary is exhaustively checked instead of string-branched at
/// every use site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementKind {
    City,
    /// Kyiv and Sevastopol: cities with special administrative status.
    SpecialCity,
    Township,
    Village,
    Hamlet,
}

/// Label used for the pseudo-settlements an empty query returns.
pub const REGION_LABEL: &str = "обл.";

impl SettlementKind {
    /// Inhabited-place categories map to a kind; `Region`/`District` rows
    /// are administrative units, not settlements, and return `None`.
    pub fn from_category(category: Category) -> Option<Self> {
        match category {
            Category::City => Some(SettlementKind::City),
            Category::SpecialCity => Some(SettlementKind::SpecialCity),
            Category::Township => Some(SettlementKind::Township),
            Category::Village => Some(SettlementKind::Village),
            Category::Hamlet => Some(SettlementKind::Hamlet),
            Category::Region | Category::District => None,
        }
    }

    /// Short localized abbreviation shown before the settlement name.
    pub fn label(self) -> &'static str {
        match self {
            SettlementKind::City | SettlementKind::SpecialCity => "м.",
            SettlementKind::Township => "смт",
            SettlementKind::Village => "с.",
            SettlementKind::Hamlet => "с-ще",
        }
    }
}

/// One inhabited place, fully resolved against its parent region/district.
///
/// `region` and `district` are empty strings when the snapshot does not
/// contain the parent row — never absent on the wire. `full_name` is always
/// derivable from `(kind, name, region)` via [`Settlement::compose_full_name`]
/// and is precomposed here so responses need no further shaping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub code: String,
    pub name: String,
    /// Kind label, e.g. `м.` or `с.` (`обл.` for region pseudo-entries).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub district: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

impl Settlement {
    /// The documented composition rule: `"{label} {name}, {region}"` when
    /// the region is known, else `"{label} {name}"`.
    pub fn compose_full_name(label: &str, name: &str, region: &str) -> String {
        if region.is_empty() {
            format!("{label} {name}")
        } else {
            format!("{label} {name}, {region}")
        }
    }
}

/// The built directory: region/district code→name maps plus the flattened
/// settlement list. Constructed once by [`convert::build_directory`]
/// (`convert` being the only writer) and read-only afterwards.
///
/// [`convert::build_directory`]: crate::model::convert::build_directory
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directory {
    pub regions: HashMap<String, String>,
    pub districts: HashMap<String, String>,
    pub settlements: Vec<Settlement>,
}

impl Directory {
    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            regions: self.regions.len(),
            districts: self.districts.len(),
            settlements: self.settlements.len(),
        }
    }
}

/// Simple aggregate statistics for the directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub regions: usize,
    pub districts: usize,
    pub settlements: usize,
}
