// crates/katottg-core/src/model/convert.rs
use super::domain::{Directory, Settlement, SettlementKind};
use crate::raw::{Category, RawEntry};

/// **Standard Converter:** Raw registry rows -> built [`Directory`].
///
/// Two full passes, in order: the snapshot does not guarantee that a parent
/// region/district row precedes the settlements referencing it, so parents
/// must be complete before any settlement resolves them.
pub fn build_directory(entries: Vec<RawEntry>) -> Directory {
    let mut directory = Directory::default();

    // Pass 1: regions keyed by level1, districts keyed by level2.
    for entry in &entries {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        match Category::from_code(&entry.category) {
            Some(Category::Region) => {
                if let Some(code) = nonempty(&entry.level1) {
                    directory.regions.insert(code.to_string(), name.to_string());
                }
            }
            Some(Category::District) => {
                if let Some(code) = nonempty(&entry.level2) {
                    directory
                        .districts
                        .insert(code.to_string(), name.to_string());
                }
            }
            _ => {}
        }
    }

    // Pass 2: settlements, resolved against the finished parent maps.
    for entry in entries {
        let kind = match Category::from_code(&entry.category).and_then(SettlementKind::from_category)
        {
            Some(kind) => kind,
            None => continue,
        };
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        // Cities are recorded at a shallower level than villages, so take
        // the deepest populated code; rows with none are dropped.
        let code = match [&entry.level5, &entry.level4, &entry.level3]
            .into_iter()
            .find_map(nonempty)
        {
            Some(code) => code,
            None => continue,
        };

        // Unresolved parents stay empty rather than failing: the snapshot
        // may legitimately omit a settlement's region or district row.
        let region = lookup(&directory.regions, &entry.level1);
        let district = lookup(&directory.districts, &entry.level2);
        let full_name = Settlement::compose_full_name(kind.label(), name, &region);

        directory.settlements.push(Settlement {
            code: code.to_string(),
            name: name.to_string(),
            kind: kind.label().to_string(),
            region,
            district,
            full_name,
        });
    }

    directory
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn lookup(map: &std::collections::HashMap<String, String>, code: &Option<String>) -> String {
    nonempty(code)
        .and_then(|c| map.get(c))
        .cloned()
        .unwrap_or_default()
}
