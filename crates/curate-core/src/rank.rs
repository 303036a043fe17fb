use std::cmp::Ordering;

use crate::Paper;

/// Return a new vector of papers sorted by `combined_score`, highest
/// first. The input is left untouched (copy-on-sort), the sort is stable
/// for equal scores, and papers without a score sink below all scored
/// papers in their original relative order.
pub fn rank_by_combined_score(papers: &[Paper]) -> Vec<Paper> {
    let mut ranked = papers.to_vec();
    ranked.sort_by(|a, b| match (a.combined_score, b.combined_score) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked
}
