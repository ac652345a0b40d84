//! Justification highlighting over document text.
//!
//! Matches are computed as byte ranges, overlaps are resolved once, and the
//! result is a flat list of segments. Precedence between overlapping matches:
//! longest first, then earliest start, then field order.

use indexmap::IndexMap;
use regex::RegexBuilder;
use std::ops::Range;

/// Pastel background colors assigned to fields in order of first encounter
pub const PALETTE: [&str; 10] = [
    "#FFE5E5", "#E5F3FF", "#E5FFE5", "#FFF5E5", "#F0E5FF", "#FFE5F0", "#E5FFFF", "#F5FFE5",
    "#FFE5FF", "#E5F5FF",
];

/// Session-local field → color assignment, round-robin over [`PALETTE`]
#[derive(Debug, Clone, Default)]
pub struct FieldColors {
    assigned: IndexMap<String, &'static str>,
}

impl FieldColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of `field`, assigning the next palette entry on first call
    pub fn color_for(&mut self, field: &str) -> &'static str {
        if let Some(&color) = self.assigned.get(field) {
            return color;
        }
        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.insert(field.to_string(), color);
        color
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.assigned.get(field).copied()
    }
}

/// Piece of content, marked when it belongs to a highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub field: Option<String>,
    pub color: String,
}

/// Passage to highlight, with the field it justifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRequest {
    pub field: Option<String>,
    pub passage: String,
    pub color: String,
}

impl HighlightRequest {
    pub fn new(field: impl Into<String>, passage: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            passage: passage.into(),
            color: color.into(),
        }
    }
}

/// Byte ranges of every case-insensitive occurrence of `passage`.
/// The passage is matched literally.
pub fn find_passage(content: &str, passage: &str) -> Vec<Range<usize>> {
    if passage.is_empty() || content.is_empty() {
        return Vec::new();
    }
    let Ok(re) = RegexBuilder::new(&regex::escape(passage))
        .case_insensitive(true)
        .build()
    else {
        return Vec::new();
    };
    re.find_iter(content).map(|m| m.range()).collect()
}

/// Highlights every occurrence of a single passage
pub fn highlight(content: &str, passage: &str, color: &str) -> Vec<Segment> {
    highlight_all(
        content,
        &[HighlightRequest {
            field: None,
            passage: passage.to_string(),
            color: color.to_string(),
        }],
    )
}

/// Highlights the passages of several fields in one pass
pub fn highlight_all(content: &str, requests: &[HighlightRequest]) -> Vec<Segment> {
    let mut candidates: Vec<(Range<usize>, usize)> = requests
        .iter()
        .enumerate()
        .flat_map(|(idx, req)| {
            find_passage(content, &req.passage)
                .into_iter()
                .map(move |r| (r, idx))
        })
        .collect();

    candidates.sort_by(|(a, ia), (b, ib)| {
        b.len()
            .cmp(&a.len())
            .then(a.start.cmp(&b.start))
            .then(ia.cmp(ib))
    });

    let mut accepted: Vec<(Range<usize>, usize)> = Vec::new();
    for (range, idx) in candidates {
        let overlaps = accepted
            .iter()
            .any(|(r, _)| range.start < r.end && r.start < range.end);
        if !overlaps {
            accepted.push((range, idx));
        }
    }
    accepted.sort_by_key(|(r, _)| r.start);

    let mut segments = Vec::new();
    let mut pos = 0;
    for (range, idx) in accepted {
        if range.start > pos {
            segments.push(Segment {
                text: content[pos..range.start].to_string(),
                mark: None,
            });
        }
        let req = &requests[idx];
        segments.push(Segment {
            text: content[range.clone()].to_string(),
            mark: Some(Mark {
                field: req.field.clone(),
                color: req.color.clone(),
            }),
        });
        pos = range.end;
    }
    if pos < content.len() {
        segments.push(Segment {
            text: content[pos..].to_string(),
            mark: None,
        });
    }
    segments
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped HTML rendering of segments, for exports and other consumers
/// without a DOM. The browser UI renders segments as nodes instead.
pub fn to_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match &s.mark {
            None => escape_html(&s.text),
            Some(mark) => format!(
                r#"<span class="highlight" style="background-color: {}">{}</span>"#,
                escape_html(&mark.color),
                escape_html(&s.text)
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.mark.is_some())
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_single_match_keeps_case() {
        let segments = highlight("The cat sat", "CAT", "#FFE5E5");
        assert_eq!(marked(&segments), vec!["cat"]);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "The ");
        assert_eq!(segments[2].text, " sat");
    }

    #[test]
    fn test_empty_or_absent_passage_is_noop() {
        for passage in ["", "dog"] {
            let segments = highlight("The cat sat", passage, "#FFE5E5");
            assert_eq!(
                segments,
                vec![Segment {
                    text: "The cat sat".into(),
                    mark: None
                }]
            );
        }
    }

    #[test]
    fn test_all_occurrences_and_literal_match() {
        assert_eq!(find_passage("a.b a.b axb", "a.b"), vec![0..3, 4..7]);
        assert_eq!(find_passage("(1+1) = 2", "(1+1)"), vec![0..5]);
    }

    #[test]
    fn test_overlap_prefers_longest() {
        let segments = highlight_all(
            "Montant total: 1200 EUR",
            &[
                HighlightRequest::new("devise", "EUR", "#E5F3FF"),
                HighlightRequest::new("montant", "1200 EUR", "#FFE5E5"),
            ],
        );
        assert_eq!(marked(&segments), vec!["1200 EUR"]);
        assert_eq!(
            segments[1].mark.as_ref().and_then(|m| m.field.as_deref()),
            Some("montant")
        );
    }

    #[test]
    fn test_equal_length_overlap_prefers_earliest() {
        let segments = highlight_all(
            "abcd",
            &[
                HighlightRequest::new("f2", "bcd", "#2"),
                HighlightRequest::new("f1", "abc", "#1"),
            ],
        );
        assert_eq!(marked(&segments), vec!["abc"]);
        assert_eq!(segments.last().map(|s| s.text.as_str()), Some("d"));
    }

    #[test]
    fn test_disjoint_fields_both_marked() {
        let segments = highlight_all(
            "Client: ACME, date: 2024",
            &[
                HighlightRequest::new("client", "acme", "#1"),
                HighlightRequest::new("annee", "2024", "#2"),
            ],
        );
        assert_eq!(marked(&segments), vec!["ACME", "2024"]);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, "Client: ACME, date: 2024");
    }

    #[test]
    fn test_html_is_escaped() {
        let html = to_html(&highlight("<b>cat</b>", "cat", "#FFE5E5"));
        assert_eq!(
            html,
            r#"&lt;b&gt;<span class="highlight" style="background-color: #FFE5E5">cat</span>&lt;/b&gt;"#
        );
    }

    #[test]
    fn test_colors_round_robin_and_stable() {
        let mut colors = FieldColors::new();
        for i in 0..PALETTE.len() {
            assert_eq!(colors.color_for(&format!("f{}", i)), PALETTE[i]);
        }
        assert_eq!(colors.color_for("f10"), PALETTE[0]);
        assert_eq!(colors.color_for("f3"), PALETTE[3]);
        assert_eq!(colors.get("absent"), None);
    }
}
