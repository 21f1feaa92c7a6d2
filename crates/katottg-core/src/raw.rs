// crates/katottg-core/src/raw.rs
//
// Raw input types mirroring the registry snapshot. These structs are only
// an ingestion format; `model::convert` turns them into the domain model.

use serde::Deserialize;

/// One row of the KATOTTG snapshot.
///
/// `category` discriminates the administrative unit; `level1`..`level5`
/// position the row in the territorial tree (oblast down to settlement).
/// Rows are read once at index-build time and never mutated.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level1: Option<String>,
    #[serde(default)]
    pub level2: Option<String>,
    #[serde(default)]
    pub level3: Option<String>,
    #[serde(default)]
    pub level4: Option<String>,
    #[serde(default)]
    pub level5: Option<String>,
}

/// The snapshot document: some mirrors publish a bare array, others wrap
/// the rows in an `items` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RegistryDocument {
    Entries(Vec<RawEntry>),
    Wrapped { items: Vec<RawEntry> },
}

impl RegistryDocument {
    pub fn into_entries(self) -> Vec<RawEntry> {
        match self {
            RegistryDocument::Entries(entries) => entries,
            RegistryDocument::Wrapped { items } => items,
        }
    }
}

/// Closed set of KATOTTG category codes.
///
/// The registry marks every row with a one-letter discriminator:
/// `O` oblast (region), `P` district, `M` city, `K` special-status city
/// (Kyiv and Sevastopol), `T` town-type settlement, `C` village, `X` hamlet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Region,
    District,
    City,
    SpecialCity,
    Township,
    Village,
    Hamlet,
}

impl Category {
    /// Maps a raw discriminator to a category. Unknown or empty codes
    /// return `None` and the row is skipped by the indexer.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "O" => Some(Category::Region),
            "P" => Some(Category::District),
            "M" => Some(Category::City),
            "K" => Some(Category::SpecialCity),
            "T" => Some(Category::Township),
            "C" => Some(Category::Village),
            "X" => Some(Category::Hamlet),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_are_closed() {
        assert_eq!(Category::from_code("O"), Some(Category::Region));
        assert_eq!(Category::from_code("K"), Some(Category::SpecialCity));
        assert_eq!(Category::from_code(" C "), Some(Category::Village));
        assert_eq!(Category::from_code("Z"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn document_accepts_bare_array_and_wrapped_items() {
        let bare: RegistryDocument =
            serde_json::from_str(r#"[{"category":"O","name":"Київська","level1":"01"}]"#).unwrap();
        assert_eq!(bare.into_entries().len(), 1);

        let wrapped: RegistryDocument =
            serde_json::from_str(r#"{"items":[{"category":"P","name":"Бучанський"}]}"#).unwrap();
        let entries = wrapped.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, "P");
    }
}
