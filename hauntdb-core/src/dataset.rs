//! Cross-join generation for the PTM/drug reaction dataset.
//!
//! The dataset table is derived: every (ptm, drug) combination gets a
//! random reaction score. Regeneration replaces the table wholesale, so
//! this produces the full row set in one call.

use rand::Rng;

/// One generated reaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub ptm: String,
    pub drug: String,
    pub reaction_score: f64,
}

/// Generate the cross join of `ptms` x `drugs` with uniform random
/// reaction scores in `[0, 10)`.
///
/// For m PTMs and n drugs the output has exactly m*n rows, one per pair,
/// in (ptm, drug) input order.
pub fn generate<R: Rng>(ptms: &[String], drugs: &[String], rng: &mut R) -> Vec<DatasetRow> {
    let mut rows = Vec::with_capacity(ptms.len() * drugs.len());
    for ptm in ptms {
        for drug in drugs {
            rows.push(DatasetRow {
                ptm: ptm.clone(),
                drug: drug.clone(),
                reaction_score: rng.gen_range(0.0..10.0),
            });
        }
    }
    rows
}
