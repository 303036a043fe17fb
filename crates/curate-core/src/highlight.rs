use regex::{Regex, RegexBuilder};

/// A run of text tagged with whether it should be rendered emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Split `text` into plain/emphasized segments based on a keyword set.
///
/// Concatenating the segment texts always reconstructs `text` exactly.
/// Matching is case-insensitive substring matching (not word-boundary
/// anchored): a token is emphasized iff any keyword occurs inside it.
/// Whitespace runs become their own plain segments, so two adjacent
/// matched tokens never merge into one emphasized run.
///
/// An empty keyword set returns the input as a single plain segment.
pub fn highlight(text: &str, keywords: &[String]) -> Vec<Segment> {
    let Some(pattern) = combined_pattern(keywords) else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    for token in split_whitespace_runs(text) {
        match token {
            Token::Whitespace(ws) => segments.push(Segment::plain(ws)),
            Token::Word(word) => {
                if pattern.is_match(word) {
                    segments.push(Segment::emphasized(word));
                } else {
                    segments.push(Segment::plain(word));
                }
            }
        }
    }
    segments
}

/// Build one case-insensitive alternation over all non-empty keywords.
/// Returns `None` when there is nothing to match. Keyword order is
/// preserved in the alternation, so the first listed keyword wins where
/// several could match the same token.
fn combined_pattern(keywords: &[String]) -> Option<Regex> {
    let escaped: Vec<String> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(k))
        .collect();
    if escaped.is_empty() {
        return None;
    }
    // All metacharacters are escaped, so the pattern always compiles.
    RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
        .ok()
}

enum Token<'a> {
    Whitespace(&'a str),
    Word(&'a str),
}

/// Split into alternating whitespace/non-whitespace runs, losslessly.
fn split_whitespace_runs(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_is_ws: Option<bool> = None;

    for (i, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match run_is_ws {
            Some(prev) if prev == is_ws => {}
            Some(prev) => {
                let run = &text[run_start..i];
                tokens.push(if prev {
                    Token::Whitespace(run)
                } else {
                    Token::Word(run)
                });
                run_start = i;
                run_is_ws = Some(is_ws);
            }
            None => run_is_ws = Some(is_ws),
        }
    }

    if let Some(prev) = run_is_ws {
        let run = &text[run_start..];
        tokens.push(if prev {
            Token::Whitespace(run)
        } else {
            Token::Word(run)
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn reconstruct(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_keywords_returns_single_plain_segment() {
        let segments = highlight("Deep Learning for NLP", &[]);
        assert_eq!(segments, vec![Segment::plain("Deep Learning for NLP")]);
    }

    #[test]
    fn blank_keywords_are_ignored() {
        let segments = highlight("some text", &kw(&[""]));
        assert_eq!(segments, vec![Segment::plain("some text")]);
    }

    #[test]
    fn multiple_keywords_mark_their_tokens() {
        let segments = highlight("Deep Learning for NLP", &kw(&["deep", "nlp"]));
        assert_eq!(reconstruct(&segments), "Deep Learning for NLP");

        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["Deep", "NLP"]);

        let plain: String = segments
            .iter()
            .filter(|s| !s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(plain, " Learning for ");
    }

    #[test]
    fn matching_is_substring_not_word_boundary() {
        let segments = highlight("transformers transform", &kw(&["transform"]));
        assert!(segments.iter().all(|s| {
            if s.text.chars().all(char::is_whitespace) {
                !s.emphasized
            } else {
                s.emphasized
            }
        }));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let segments = highlight("BERT and bert", &kw(&["Bert"]));
        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["BERT", "bert"]);
    }

    #[test]
    fn adjacent_matches_are_separated_by_whitespace_segments() {
        let segments = highlight("graph graph", &kw(&["graph"]));
        assert_eq!(
            segments,
            vec![
                Segment::emphasized("graph"),
                Segment::plain(" "),
                Segment::emphasized("graph"),
            ]
        );
    }

    #[test]
    fn keyword_with_regex_metacharacters_is_literal() {
        let segments = highlight("uses c++ heavily", &kw(&["c++"]));
        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["c++"]);
    }

    #[test]
    fn reconstruction_preserves_leading_trailing_and_inner_whitespace() {
        let text = "  spaced\t\tout \n text ";
        let segments = highlight(text, &kw(&["spaced", "missing"]));
        assert_eq!(reconstruct(&segments), text);
    }

    #[test]
    fn no_keywords_match_yields_plain_tokens() {
        let segments = highlight("nothing here", &kw(&["quantum"]));
        assert!(segments.iter().all(|s| !s.emphasized));
        assert_eq!(reconstruct(&segments), "nothing here");
    }

    #[test]
    fn empty_text_with_keywords_reconstructs_empty() {
        let segments = highlight("", &kw(&["x"]));
        assert_eq!(reconstruct(&segments), "");
    }

    #[test]
    fn unicode_text_splits_on_char_boundaries() {
        let text = "éclair  café";
        let segments = highlight(text, &kw(&["café"]));
        assert_eq!(reconstruct(&segments), text);
        assert!(segments.iter().any(|s| s.emphasized && s.text == "café"));
    }
}
