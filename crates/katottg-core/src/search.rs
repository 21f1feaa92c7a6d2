// crates/katottg-core/src/search.rs

use crate::model::{Directory, Settlement, REGION_LABEL};
use crate::text::{equals_folded, fold_key, uk_cmp};

/// Queries shorter than this scan nothing: one keystroke of a partial word
/// would match half the registry.
pub const MIN_QUERY_CHARS: usize = 2;

impl Directory {
    /// Ranked settlement search.
    ///
    /// - empty query: up to `limit` region pseudo-entries, for a
    ///   "browse by region" affordance;
    /// - shorter than [`MIN_QUERY_CHARS`]: empty result, deliberately;
    /// - otherwise: substring match on folded name/region/district, exact
    ///   name matches first, then Ukrainian alphabetical order, capped at
    ///   `limit`.
    ///
    /// Output is deterministic for a fixed directory and query; ties keep
    /// indexing order (the sort is stable).
    pub fn search(&self, query: &str, limit: usize) -> Vec<Settlement> {
        let query = query.trim();
        if query.is_empty() {
            return self.browse_regions(limit);
        }
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let q = fold_key(query);

        // Linear scan; the directory is in memory and queries are
        // interactive, so no inverted index is kept.
        let mut hits: Vec<&Settlement> = self
            .settlements
            .iter()
            .filter(|s| {
                fold_key(&s.name).contains(&q)
                    || (!s.region.is_empty() && fold_key(&s.region).contains(&q))
                    || (!s.district.is_empty() && fold_key(&s.district).contains(&q))
            })
            .collect();

        hits.sort_by(|a, b| {
            let exact_a = equals_folded(&a.name, query);
            let exact_b = equals_folded(&b.name, query);
            exact_b
                .cmp(&exact_a)
                .then_with(|| uk_cmp(&a.name, &b.name))
        });
        hits.truncate(limit);

        hits.into_iter().cloned().collect()
    }

    /// Region list shaped as pseudo-settlements, in collation order so the
    /// output does not depend on map iteration order.
    pub fn browse_regions(&self, limit: usize) -> Vec<Settlement> {
        let mut names: Vec<&String> = self.regions.values().collect();
        names.sort_by(|a, b| uk_cmp(a, b));

        names
            .into_iter()
            .take(limit)
            .map(|name| Settlement {
                code: format!("region_{name}"),
                name: name.clone(),
                kind: REGION_LABEL.to_string(),
                region: String::new(),
                district: String::new(),
                full_name: format!("{name} область"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convert::build_directory;
    use crate::raw::RawEntry;

    fn entry(category: &str, name: &str, levels: [&str; 5]) -> RawEntry {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RawEntry {
            category: category.to_string(),
            name: name.to_string(),
            level1: opt(levels[0]),
            level2: opt(levels[1]),
            level3: opt(levels[2]),
            level4: opt(levels[3]),
            level5: opt(levels[4]),
        }
    }

    fn sample_directory() -> Directory {
        build_directory(vec![
            entry("O", "Київська", ["01", "", "", "", ""]),
            entry("O", "Миколаївська", ["48", "", "", "", ""]),
            entry("P", "Бучанський", ["01", "0102", "", "", ""]),
            entry("C", "Іванівка", ["01", "0102", "010203", "", ""]),
            entry("C", "Миколаївка", ["48", "", "480101", "", ""]),
            entry("C", "Микола", ["48", "", "480102", "", ""]),
            entry("M", "Ірпінь", ["01", "0102", "010205", "", ""]),
        ])
    }

    #[test]
    fn prefix_query_finds_settlement_with_composed_full_name() {
        let hits = sample_directory().search("іван", 20);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "с. Іванівка, Київська");
        assert_eq!(hits[0].district, "Бучанський");
    }

    #[test]
    fn empty_query_lists_regions_as_pseudo_settlements() {
        let hits = sample_directory().search("", 20);
        assert_eq!(hits.len(), 2);
        // collation order: Київська before Миколаївська
        assert_eq!(hits[0].code, "region_Київська");
        assert_eq!(hits[0].name, "Київська");
        assert_eq!(hits[0].kind, REGION_LABEL);
        assert_eq!(hits[0].full_name, "Київська область");
    }

    #[test]
    fn empty_query_respects_limit() {
        let hits = sample_directory().search("  ", 1);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn single_char_query_returns_nothing() {
        let directory = sample_directory();
        assert!(directory.search("a", 20).is_empty());
        assert!(directory.search("і", 20).is_empty());
        assert!(directory.search(" і ", 20).is_empty());
    }

    #[test]
    fn exact_name_match_ranks_before_longer_matches() {
        let hits = sample_directory().search("микола", 20);
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        // "Микола" is an exact (folded) match; "Миколаївка" only contains
        // the query; the region match trails alphabetically.
        assert_eq!(names[0], "Микола");
        assert!(names.contains(&"Миколаївка"));
    }

    #[test]
    fn query_matches_region_and_district_fields_too() {
        let directory = sample_directory();

        let by_region: Vec<_> = directory
            .search("київськ", 20)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert!(by_region.contains(&"Іванівка".to_string()));
        assert!(by_region.contains(&"Ірпінь".to_string()));

        let by_district = directory.search("бучан", 20);
        assert_eq!(by_district.len(), 2);
    }

    #[test]
    fn results_never_exceed_limit() {
        let directory = sample_directory();
        assert!(directory.search("і", 0).is_empty());
        assert_eq!(directory.search("київськ", 1).len(), 1);
        assert_eq!(directory.search("", 1).len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hits = sample_directory().search("ІРПІНЬ", 20);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ірпінь");
    }

    #[test]
    fn alphabetical_fallback_uses_ukrainian_collation() {
        let hits = sample_directory().search("київськ", 20);
        let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
        // і < і is a tie on the first letter; Іванівка < Ірпінь because
        // в < р in the alphabet
        assert_eq!(names, ["Іванівка", "Ірпінь"]);
    }
}
