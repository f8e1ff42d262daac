//! Pairwise score derivation for the correlation matrix table.
//!
//! Each PTM's reaction scores are summed across drugs, then every pair of
//! PTMs gets a similarity score of `min(a, b) / max(a, b)`. The name
//! "spearman_score" is inherited from the table schema; there is no rank
//! correlation involved.

use std::collections::BTreeMap;

use crate::dataset::DatasetRow;

/// One derived correlation entry, keyed by an ordered (ptm1, ptm2) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationEntry {
    pub ptm1: String,
    pub ptm2: String,
    pub spearman_score: f64,
}

/// Fold dataset rows into a per-PTM summed score map.
pub fn sum_scores(rows: &[DatasetRow]) -> BTreeMap<String, f64> {
    let mut sums = BTreeMap::new();
    for row in rows {
        *sums.entry(row.ptm.clone()).or_insert(0.0) += row.reaction_score;
    }
    sums
}

/// Similarity ratio of two summed scores: `min / max`.
///
/// Defined as 0.0 when both sums are zero, so an all-zero key never
/// produces NaN rows.
pub fn ratio(a: f64, b: f64) -> f64 {
    let max = a.max(b);
    if max == 0.0 {
        0.0
    } else {
        a.min(b) / max
    }
}

/// Derive the full correlation matrix from summed scores.
///
/// The ratio is symmetric, so each unordered pair is computed once and
/// mirrored into both (a, b) and (b, a). Self-pairs are emitted once.
/// Output order is deterministic (keys sorted, upper triangle walked
/// row by row).
pub fn pairwise_ratios(sums: &BTreeMap<String, f64>) -> Vec<CorrelationEntry> {
    let keys: Vec<(&String, &f64)> = sums.iter().collect();
    let mut entries = Vec::with_capacity(keys.len() * keys.len());

    for (i, (ptm_a, score_a)) in keys.iter().enumerate() {
        for (ptm_b, score_b) in &keys[i..] {
            let score = ratio(**score_a, **score_b);
            entries.push(CorrelationEntry {
                ptm1: (*ptm_a).clone(),
                ptm2: (*ptm_b).clone(),
                spearman_score: score,
            });
            if ptm_a != ptm_b {
                entries.push(CorrelationEntry {
                    ptm1: (*ptm_b).clone(),
                    ptm2: (*ptm_a).clone(),
                    spearman_score: score,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sums_of(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn find<'a>(entries: &'a [CorrelationEntry], a: &str, b: &str) -> &'a CorrelationEntry {
        entries
            .iter()
            .find(|e| e.ptm1 == a && e.ptm2 == b)
            .unwrap_or_else(|| panic!("missing entry ({a}, {b})"))
    }

    #[test]
    fn two_keys_emit_both_orderings() {
        let entries = pairwise_ratios(&sums_of(&[("A", 2.0), ("B", 4.0)]));
        assert_eq!(entries.len(), 4);

        assert_eq!(find(&entries, "A", "A").spearman_score, 1.0);
        assert_eq!(find(&entries, "B", "B").spearman_score, 1.0);
        assert_eq!(find(&entries, "A", "B").spearman_score, 0.5);
        assert_eq!(find(&entries, "B", "A").spearman_score, 0.5);
    }

    #[test]
    fn matrix_is_n_squared() {
        let sums = sums_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0)]);
        assert_eq!(pairwise_ratios(&sums).len(), 16);
    }

    #[test]
    fn zero_sums_do_not_produce_nan() {
        let entries = pairwise_ratios(&sums_of(&[("A", 0.0), ("B", 3.0)]));

        assert_eq!(find(&entries, "A", "A").spearman_score, 0.0);
        assert_eq!(find(&entries, "A", "B").spearman_score, 0.0);
        assert!(entries.iter().all(|e| !e.spearman_score.is_nan()));
    }

    #[test]
    fn empty_sums_yield_empty_matrix() {
        assert!(pairwise_ratios(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn sum_scores_folds_across_drugs() {
        let rows = vec![
            DatasetRow {
                ptm: "A".into(),
                drug: "d1".into(),
                reaction_score: 1.5,
            },
            DatasetRow {
                ptm: "A".into(),
                drug: "d2".into(),
                reaction_score: 2.5,
            },
            DatasetRow {
                ptm: "B".into(),
                drug: "d1".into(),
                reaction_score: 3.0,
            },
        ];

        let sums = sum_scores(&rows);
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["A"], 4.0);
        assert_eq!(sums["B"], 3.0);
    }
}
