use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::localize::{DetailView, NoResults, SectionLabels, SummaryView};
use crate::model::Language;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGuidesParams {
    /// Display language, "en" or "hi" (default: server setting).
    pub lang: Option<Language>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchGuidesParams {
    /// Text to look for in guide titles and descriptions, in English or Hindi.
    /// An empty query lists every guide.
    pub query: String,
    /// Display language, "en" or "hi" (default: server setting).
    pub lang: Option<Language>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGuideParams {
    /// Guide ID such as "oil" or "electrical".
    pub guide_id: String,
    /// Display language, "en" or "hi" (default: server setting).
    pub lang: Option<Language>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ToggleLanguageParams {
    /// The language currently displayed.
    pub lang: Language,
}

/// Hospital emergency line shown on every screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EmergencyContact {
    /// Button text, e.g. "Call Emergency: 0581-2510204"
    pub label: String,
    /// Dialable URI, e.g. "tel:+915812510204"
    pub phone_uri: String,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GuideListResponse {
    pub lang: Language,
    pub guides: Vec<SummaryView>,
    pub emergency: EmergencyContact,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SearchGuidesResponse {
    pub lang: Language,
    pub query: String,
    pub guides: Vec<SummaryView>,
    /// Present when nothing matched.
    pub no_results: Option<NoResults>,
    pub emergency: EmergencyContact,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GuideDetailResponse {
    pub lang: Language,
    pub labels: SectionLabels,
    pub guide: DetailView,
    pub emergency: EmergencyContact,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct LanguageResponse {
    pub lang: Language,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CatalogInfoResponse {
    /// Guides in the document, hidden ones included
    pub guide_count: usize,
    pub listed_count: usize,
    pub hidden_count: usize,
    /// SHA-256 of the loaded guide document
    pub fingerprint: String,
}
