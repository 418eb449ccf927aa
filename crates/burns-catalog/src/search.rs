use crate::model::GuideSummary;

/// Narrows a listing to the guides whose title or description contains `query`.
///
/// Matching is case-insensitive substring containment over all four text fields
/// (English and Hindi title, English and Hindi description), regardless of the
/// display language. The query is used literally: whitespace is not trimmed
/// here, see [`QueryPolicy`]. An empty query matches every guide. The result
/// keeps the input order.
pub fn filter<'a>(summaries: &'a [GuideSummary], query: &str) -> Vec<&'a GuideSummary> {
    if query.is_empty() {
        return summaries.iter().collect();
    }
    let needle = query.to_lowercase();
    summaries
        .iter()
        .filter(|summary| matches(summary, &needle))
        .collect()
}

fn matches(summary: &GuideSummary, needle: &str) -> bool {
    [
        &summary.title.en,
        &summary.title.hi,
        &summary.description.en,
        &summary.description.hi,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// How raw query text from a client is prepared before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPolicy {
    /// Pass the query through untouched.
    #[default]
    Literal,
    /// Strip leading and trailing whitespace. A whitespace-only query becomes empty.
    Trim,
}

impl QueryPolicy {
    pub fn apply(self, query: &str) -> &str {
        match self {
            QueryPolicy::Literal => query,
            QueryPolicy::Trim => query.trim(),
        }
    }
}
