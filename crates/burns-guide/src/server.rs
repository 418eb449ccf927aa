/// MCP server for the burn first-aid guide.
///
/// Exposes five tools:
/// - `list_guides`: every listed guide, localized
/// - `search_guides`: substring search over titles and descriptions
/// - `get_guide`: a single guide page by ID
/// - `toggle_language`: the other display language
/// - `catalog_info`: counts and fingerprint of the served document
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::{debug, info};

use burns_catalog::localize::{not_found_message, DetailView, NoResults, SectionLabels, SummaryView};
use burns_catalog::mcp_api::{
    CatalogInfoResponse, EmergencyContact, GetGuideParams, GuideDetailResponse,
    GuideListResponse, LanguageResponse, ListGuidesParams, SearchGuidesParams,
    SearchGuidesResponse, ToggleLanguageParams,
};
use burns_catalog::search::{self, QueryPolicy};
use burns_catalog::{Catalog, Language};

use crate::config::Config;

#[derive(Clone)]
pub struct BurnsGuideServer {
    catalog: Arc<Catalog>,
    default_lang: Language,
    query_policy: QueryPolicy,
    emergency: EmergencyContact,
    tool_router: ToolRouter<BurnsGuideServer>,
}

impl BurnsGuideServer {
    pub fn new(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self {
            catalog,
            default_lang: config.default_lang,
            query_policy: config.query_policy,
            emergency: config.emergency_contact(),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl BurnsGuideServer {
    #[tool(description = "List all burn first-aid guides in display order, localized to English ('en') or Hindi ('hi').")]
    async fn list_guides(
        &self,
        Parameters(params): Parameters<ListGuidesParams>,
    ) -> Result<Json<GuideListResponse>, String> {
        let lang = params.lang.unwrap_or(self.default_lang);
        let guides = self
            .catalog
            .list_summaries()
            .iter()
            .map(|s| SummaryView::new(s, lang))
            .collect();

        Ok(Json(GuideListResponse {
            lang,
            guides,
            emergency: self.emergency.clone(),
        }))
    }

    #[tool(description = "Search burn guides by text. Matches English and Hindi titles and descriptions, case-insensitively. An empty query returns every guide.")]
    async fn search_guides(
        &self,
        Parameters(params): Parameters<SearchGuidesParams>,
    ) -> Result<Json<SearchGuidesResponse>, String> {
        let lang = params.lang.unwrap_or(self.default_lang);
        let query = self.query_policy.apply(&params.query);

        let hits = search::filter(self.catalog.list_summaries(), query);
        debug!(query, matches = hits.len(), "search_guides");

        let no_results = hits.is_empty().then(|| NoResults::new(query, lang));
        Ok(Json(SearchGuidesResponse {
            lang,
            query: query.to_string(),
            guides: hits.iter().map(|s| SummaryView::new(s, lang)).collect(),
            no_results,
            emergency: self.emergency.clone(),
        }))
    }

    #[tool(description = "Get a burn first-aid guide by ID (e.g. 'oil', 'electrical'): immediate actions, things to avoid, numbered steps and hospital warning signs.")]
    async fn get_guide(
        &self,
        Parameters(params): Parameters<GetGuideParams>,
    ) -> Result<Json<GuideDetailResponse>, String> {
        let lang = params.lang.unwrap_or(self.default_lang);
        let guide_id = params.guide_id.trim();
        if guide_id.is_empty() {
            return Err("guide_id must not be empty".to_string());
        }

        let Some(detail) = self.catalog.get_detail_by_id(guide_id) else {
            info!(guide_id, "guide not found");
            return Err(format!("{}: {guide_id}", not_found_message(lang)));
        };

        Ok(Json(GuideDetailResponse {
            lang,
            labels: SectionLabels::for_lang(lang),
            guide: DetailView::new(detail, lang),
            emergency: self.emergency.clone(),
        }))
    }

    #[tool(description = "Return the other display language: 'en' becomes 'hi' and 'hi' becomes 'en'.")]
    async fn toggle_language(
        &self,
        Parameters(params): Parameters<ToggleLanguageParams>,
    ) -> Result<Json<LanguageResponse>, String> {
        Ok(Json(LanguageResponse {
            lang: params.lang.toggled(),
        }))
    }

    #[tool(description = "Report how many guides are served and the fingerprint of the loaded guide document.")]
    async fn catalog_info(&self) -> Result<Json<CatalogInfoResponse>, String> {
        Ok(Json(CatalogInfoResponse {
            guide_count: self.catalog.len(),
            listed_count: self.catalog.list_summaries().len(),
            hidden_count: self.catalog.hidden_count(),
            fingerprint: self.catalog.fingerprint().to_string(),
        }))
    }
}

#[tool_handler]
impl ServerHandler for BurnsGuideServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "burns-guide".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Burn first-aid guide MCP server (English/Hindi). Use list_guides to show the \
                 home screen, search_guides as the user types, get_guide to open a guide by ID, \
                 and toggle_language to switch between 'en' and 'hi'. Every response carries the \
                 hospital emergency line."
                    .to_string(),
            ),
        }
    }
}
