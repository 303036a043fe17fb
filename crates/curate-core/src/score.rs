use crate::Paper;

/// The four relevance signals the service blends into `combined_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreComponent {
    Bm25,
    TfIdf,
    Keyword,
    Embedding,
}

impl ScoreComponent {
    pub fn all() -> &'static [ScoreComponent] {
        &[
            ScoreComponent::Bm25,
            ScoreComponent::TfIdf,
            ScoreComponent::Keyword,
            ScoreComponent::Embedding,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bm25 => "BM25",
            Self::TfIdf => "TF-IDF",
            Self::Keyword => "Keyword",
            Self::Embedding => "Embedding",
        }
    }

    /// Blend weight shown in the legend. Display-only: the service sends
    /// `combined_score` precomputed and nothing here re-derives it, so
    /// these track the server's advertised algorithm, not a local one.
    pub fn legend_weight(self) -> f64 {
        match self {
            Self::Bm25 => 0.35,
            Self::TfIdf => 0.40,
            Self::Keyword => 0.10,
            Self::Embedding => 0.15,
        }
    }

    pub fn value(self, paper: &Paper) -> Option<f64> {
        match self {
            Self::Bm25 => paper.bm25_score,
            Self::TfIdf => paper.tfidf_score,
            Self::Keyword => paper.keyword_score,
            Self::Embedding => paper.embedding_score,
        }
    }
}

/// Per-component shares of a paper's sub-scores, in `ScoreComponent::all`
/// order, each in 0..=1 and summing to 1. `None` when the paper carries
/// no positive sub-scores (author papers, or a degenerate feed entry) —
/// callers should skip the breakdown chart entirely in that case.
pub fn normalized_breakdown(paper: &Paper) -> Option<[f64; 4]> {
    let values: Vec<f64> = ScoreComponent::all()
        .iter()
        .map(|c| c.value(paper).unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let mut shares = [0.0; 4];
    for (slot, value) in shares.iter_mut().zip(values) {
        *slot = value / total;
    }
    Some(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_paper() -> Paper {
        Paper {
            id: "1".into(),
            title: "t".into(),
            summary: String::new(),
            authors: Vec::new(),
            published: String::new(),
            pdf_url: String::new(),
            embedding_score: Some(0.1),
            keyword_score: Some(0.1),
            tfidf_score: Some(0.4),
            bm25_score: Some(0.4),
            combined_score: Some(0.33),
        }
    }

    #[test]
    fn legend_weights_sum_to_one() {
        let total: f64 = ScoreComponent::all()
            .iter()
            .map(|c| c.legend_weight())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_shares_sum_to_one() {
        let shares = normalized_breakdown(&scored_paper()).unwrap();
        let total: f64 = shares.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((shares[0] - 0.4).abs() < 1e-9); // BM25 first
    }

    #[test]
    fn breakdown_absent_without_scores() {
        let mut paper = scored_paper();
        paper.embedding_score = None;
        paper.keyword_score = None;
        paper.tfidf_score = None;
        paper.bm25_score = None;
        assert!(normalized_breakdown(&paper).is_none());
    }

    #[test]
    fn negative_subscores_are_clamped() {
        let mut paper = scored_paper();
        paper.embedding_score = Some(-0.5);
        let shares = normalized_breakdown(&paper).unwrap();
        assert_eq!(shares[3], 0.0);
    }
}
