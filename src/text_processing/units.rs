/// Unit vocabulary recognized by the unit-attached integer rule
use std::collections::BTreeSet;

/// Default units: currency, length, volume, mass, power, time and counters
pub const DEFAULT_UNITS: [&str; 21] = [
    "元", "米", "厘米", "毫米", "千米", "英尺", "加仑", "升", "毫升", "公斤", "瓦", "度", "秒",
    "分钟", "小时", "天", "月", "日", "种", "个", "人",
];

/// A deduplicated set of unit tokens.
///
/// Built fresh for each call from [`DEFAULT_UNITS`] plus whatever the caller
/// adds; the default constant itself is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitVocabulary {
    units: BTreeSet<String>,
}

impl Default for UnitVocabulary {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS.iter().map(|u| u.to_string()).collect(),
        }
    }
}

impl UnitVocabulary {
    /// A vocabulary with no units at all. The unit rule then never fires.
    pub fn empty() -> Self {
        Self {
            units: BTreeSet::new(),
        }
    }

    /// Default units merged with a comma-separated list.
    ///
    /// Entries are trimmed and empty ones dropped, so `None`, `""` and
    /// `" , ,"` all give the plain default set.
    pub fn with_additional(additional: Option<&str>) -> Self {
        let mut vocabulary = Self::default();
        if let Some(list) = additional {
            vocabulary.extend_from_list(list);
        }
        vocabulary
    }

    /// Merge a comma-separated list into this vocabulary.
    pub fn extend_from_list(&mut self, list: &str) {
        self.units.extend(parse_unit_list(list));
    }

    pub fn insert(&mut self, unit: &str) -> bool {
        let unit = unit.trim();
        if unit.is_empty() {
            return false;
        }
        self.units.insert(unit.to_string())
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains(unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units ordered longest first, ties broken lexicographically.
    ///
    /// The unit rule tries alternatives in this order, so "厘米" wins over a
    /// caller-supplied "厘" and the chosen token never depends on hashing.
    pub fn match_order(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = self.units.iter().map(String::as_str).collect();
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        ordered
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }
}

/// Split a comma-separated unit list, trimming entries and dropping empty ones.
pub fn parse_unit_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_every_default_unit() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(vocabulary.len(), DEFAULT_UNITS.len());
        for unit in DEFAULT_UNITS {
            assert!(vocabulary.contains(unit), "missing {}", unit);
        }
    }

    #[test]
    fn test_additional_units_are_trimmed_and_merged() {
        let vocabulary = UnitVocabulary::with_additional(Some(" 公里 , 克,,  "));
        assert!(vocabulary.contains("公里"));
        assert!(vocabulary.contains("克"));
        assert_eq!(vocabulary.len(), DEFAULT_UNITS.len() + 2);
    }

    #[test]
    fn test_duplicates_removed() {
        let vocabulary = UnitVocabulary::with_additional(Some("元,元,米"));
        assert_eq!(vocabulary.len(), DEFAULT_UNITS.len());
    }

    #[test]
    fn test_blank_list_gives_defaults() {
        assert_eq!(
            UnitVocabulary::with_additional(Some(" , ,")),
            UnitVocabulary::default()
        );
        assert_eq!(UnitVocabulary::with_additional(None), UnitVocabulary::default());
    }

    #[test]
    fn test_default_constant_not_mutated() {
        let _ = UnitVocabulary::with_additional(Some("公里"));
        assert!(!DEFAULT_UNITS.contains(&"公里"));
        assert!(!UnitVocabulary::default().contains("公里"));
    }

    #[test]
    fn test_match_order_longest_first() {
        let vocabulary = UnitVocabulary::with_additional(Some("厘"));
        let order = vocabulary.match_order();
        let long = order.iter().position(|u| *u == "厘米").unwrap();
        let short = order.iter().position(|u| *u == "厘").unwrap();
        assert!(long < short);
        assert!(order[0].chars().count() >= order[order.len() - 1].chars().count());
    }

    #[test]
    fn test_insert_rejects_blank() {
        let mut vocabulary = UnitVocabulary::empty();
        assert!(!vocabulary.insert("   "));
        assert!(vocabulary.insert("包"));
        assert!(!vocabulary.insert("包"));
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn test_parse_unit_list() {
        assert_eq!(parse_unit_list("a, b ,,c"), vec!["a", "b", "c"]);
        assert!(parse_unit_list("").is_empty());
    }
}
