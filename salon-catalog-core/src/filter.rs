//! Name filter shared by both collections.

use crate::types::Named;

/// Whether `name` contains `query`, ignoring case.
///
/// Case folding goes through [`str::to_lowercase`], which follows the Unicode
/// lowercase mapping, so `"DEPILACIÓN"` matches `"depilación"`.
pub fn matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Stable sub-sequence of `records` whose name contains `query`.
///
/// An empty query keeps every record; no match yields an empty vector.
pub fn filter<'a, R: Named>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Named for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_facial_query_keeps_input_order() {
        let records = [Item("Facial Cleanse"), Item("facial Peel"), Item("Manicure")];
        let result = filter(&records, "facial");
        assert_eq!(names(&result), vec!["Facial Cleanse", "facial Peel"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let records = [Item("b"), Item("a"), Item("c")];
        assert_eq!(names(&filter(&records, "")), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = [Item("Manicure")];
        assert!(filter(&records, "pedicure").is_empty());
        assert!(filter::<Item>(&[], "x").is_empty());
    }

    #[test]
    fn test_accented_case_folding() {
        let records = [Item("DEPILACIÓN Láser"), Item("Peeling Químico"), Item("Masaje")];
        assert_eq!(names(&filter(&records, "depilación")), vec!["DEPILACIÓN Láser"]);
        assert_eq!(names(&filter(&records, "QUÍMICO")), vec!["Peeling Químico"]);
        // accents are significant, only case is folded
        assert!(filter(&records, "quimico").is_empty());
    }

    #[test]
    fn test_known_queries() {
        let records = [
            Item("Facial Cleanse"),
            Item("Ácido Hialurónico"),
            Item("Manicure"),
            Item("Pedicure Spa"),
        ];
        let cases: [(&str, &[&str]); 6] = [
            ("ÁCIDO", &["Ácido Hialurónico"]),
            ("hialurÓn", &["Ácido Hialurónico"]),
            ("cure", &["Manicure", "Pedicure Spa"]),
            ("CuRe sP", &["Pedicure Spa"]),
            (" ", &["Facial Cleanse", "Ácido Hialurónico", "Pedicure Spa"]),
            ("acido", &[]),
        ];
        for (query, expected) in cases {
            assert_eq!(names(&filter(&records, query)), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_membership_agrees_with_matches() {
        let records = [
            Item("Facial Cleanse"),
            Item("Ácido Hialurónico"),
            Item("Manicure"),
            Item("Pedicure Spa"),
        ];
        for query in ["", "a", "CURE", "ácido", "spa", "zzz", " "] {
            let result = filter(&records, query);
            for r in &records {
                let kept = result.iter().any(|k| std::ptr::eq(*k, r));
                assert_eq!(kept, matches(r.0, query), "query {query:?} on {:?}", r.0);
            }
            // order preserved: kept records appear in increasing input position
            let positions: Vec<usize> = result
                .iter()
                .map(|k| records.iter().position(|r| std::ptr::eq(r, *k)).unwrap_or(usize::MAX))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
