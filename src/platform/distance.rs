//! Name similarity for "did you mean" suggestions.
//!
//! Distances are counted in Unicode scalar values (`char`s), not bytes, so a
//! single CJK or accented character costs one edit like any ASCII letter.

use crate::config::PlatformEntry;

/// Upper bound on the number of names [`suggest_names`] returns.
pub const MAX_SUGGESTIONS: usize = 5;

/// Levenshtein distance: the minimum number of single-character inserts,
/// deletes or substitutions turning `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // dp[i][j] is the distance between a[..i] and b[..j].
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }

    dp[a.len()][b.len()]
}

/// Up to [`MAX_SUGGESTIONS`] platform names ordered by distance to `query`.
///
/// Ties keep configuration order.
pub fn suggest_names(platforms: &[PlatformEntry], query: &str) -> Vec<String> {
    let mut ranked: Vec<(usize, &str)> = platforms
        .iter()
        .map(|p| (edit_distance(&p.name, query), p.name.as_str()))
        .collect();

    // sort_by_key is stable.
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn named(names: &[&str]) -> Vec<PlatformEntry> {
        names
            .iter()
            .map(|n| PlatformEntry {
                name: n.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("prod", "production"), 6);
    }

    #[test]
    fn multibyte_characters_count_once() {
        assert_eq!(edit_distance("生产", "生产环境"), 2);
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    fn suggestions_rank_closest_first() {
        let platforms = named(&["staging", "prod"]);
        assert_eq!(suggest_names(&platforms, "production"), ["prod", "staging"]);
    }

    #[test]
    fn ties_keep_config_order() {
        let platforms = named(&["bb", "aa", "cc"]);
        assert_eq!(suggest_names(&platforms, "zz"), ["bb", "aa", "cc"]);
    }

    #[test]
    fn at_most_five_suggestions() {
        let platforms = named(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
        assert_eq!(suggest_names(&platforms, "a").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn empty_set_suggests_nothing() {
        assert!(suggest_names(&[], "prod").is_empty());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn distance_bounded_by_longer_input(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = edit_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert_eq!(d == 0, a == b);
        }

        #[test]
        fn suggestions_sorted_bounded_and_known(
            names in prop::collection::vec("[a-z]{1,8}", 0..12),
            query in "[a-z]{1,10}",
        ) {
            let platforms: Vec<PlatformEntry> = names
                .iter()
                .map(|n| PlatformEntry { name: n.clone(), ..Default::default() })
                .collect();
            let suggestions = suggest_names(&platforms, &query);

            prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);
            prop_assert!(suggestions.iter().all(|s| names.contains(s)));
            let distances: Vec<usize> =
                suggestions.iter().map(|s| edit_distance(s, &query)).collect();
            prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
