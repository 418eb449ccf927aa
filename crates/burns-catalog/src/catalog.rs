use std::collections::HashMap;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::CatalogError;
use crate::model::{BilingualText, GuideDetail, GuideDocument, GuideSummary, RawGuide};

const BUNDLED_DOCUMENT: &str = include_str!("../data/burns-data.json");

/// Read-only guide catalog, built once from a guide document.
///
/// The listing excludes guides flagged `hidden`, while lookup by id covers every
/// guide in the document. Hidden guides are unlisted but still reachable by id.
#[derive(Debug)]
pub struct Catalog {
    summaries: Vec<GuideSummary>,
    details: Vec<GuideDetail>,
    index: HashMap<String, usize>,
    hidden_count: usize,
    fingerprint: String,
}

impl Catalog {
    /// The document compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DOCUMENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let document: GuideDocument = serde_json::from_str(content)?;
        Self::build(document, fingerprint(content.as_bytes()))
    }

    fn build(document: GuideDocument, fingerprint: String) -> Result<Self, CatalogError> {
        let mut summaries = Vec::new();
        let mut details = Vec::with_capacity(document.guides.len());
        let mut index = HashMap::with_capacity(document.guides.len());
        let mut hidden_count = 0;

        for guide in document.guides {
            validate_guide(&guide)?;
            if index.contains_key(&guide.id) {
                return Err(CatalogError::DuplicateId(guide.id));
            }

            if guide.hidden {
                hidden_count += 1;
            } else {
                summaries.push(guide.summary());
            }
            index.insert(guide.id.clone(), details.len());
            details.push(guide.into_detail());
        }

        debug!(
            guides = details.len(),
            listed = summaries.len(),
            hidden = hidden_count,
            "catalog built"
        );

        Ok(Self {
            summaries,
            details,
            index,
            hidden_count,
            fingerprint,
        })
    }

    /// Listed guides in document order.
    pub fn list_summaries(&self) -> &[GuideSummary] {
        &self.summaries
    }

    /// Exact-id lookup across every guide, hidden ones included.
    pub fn get_detail_by_id(&self, id: &str) -> Option<&GuideDetail> {
        self.index.get(id).map(|&i| &self.details[i])
    }

    /// Number of guides in the document, hidden ones included.
    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    /// SHA-256 of the source document, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

fn validate_guide(guide: &RawGuide) -> Result<(), CatalogError> {
    if guide.id.trim().is_empty() {
        return Err(CatalogError::Invalid {
            guide: guide.id.clone(),
            message: "id is empty".to_string(),
        });
    }

    let invalid = |message: String| CatalogError::Invalid {
        guide: guide.id.clone(),
        message,
    };

    require_asset(&guide.image_url, "imageUrl").map_err(invalid)?;
    require_asset(&guide.hero_image, "heroImage").map_err(invalid)?;
    require_text(&guide.title, "title").map_err(invalid)?;
    require_text(&guide.description, "description").map_err(invalid)?;
    require_text(&guide.subtitle, "subtitle").map_err(invalid)?;

    for (section, items) in [("dos", &guide.dos), ("donts", &guide.donts)] {
        for (i, item) in items.iter().enumerate() {
            require_asset(&item.image, &format!("{section}[{i}].image")).map_err(invalid)?;
            require_text(&item.text, &format!("{section}[{i}].text")).map_err(invalid)?;
        }
    }
    for (i, step) in guide.steps.iter().enumerate() {
        require_text(&step.title, &format!("steps[{i}].title")).map_err(invalid)?;
        require_text(&step.description, &format!("steps[{i}].description")).map_err(invalid)?;
    }
    for (i, warning) in guide.warnings.iter().enumerate() {
        require_text(warning, &format!("warnings[{i}]")).map_err(invalid)?;
    }
    if let Some(video) = &guide.video {
        if video.id.trim().is_empty() {
            return Err(invalid("video.id is empty".to_string()));
        }
    }
    Ok(())
}

fn require_text(text: &BilingualText, field: &str) -> Result<(), String> {
    if text.en.trim().is_empty() {
        return Err(format!("{field}.en is empty"));
    }
    if text.hi.trim().is_empty() {
        return Err(format!("{field}.hi is empty"));
    }
    Ok(())
}

fn require_asset(path: &str, field: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err(format!("{field} is empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VideoEmbed, VideoProvider};
    use crate::test_support::{document_json, guide};

    #[test]
    fn listing_skips_hidden_and_keeps_order() {
        let json = document_json(vec![
            guide("oil", "Hot Oil Burn", "तेल जलना"),
            guide("wax", "Hot Wax Burn", "मोम से जलना").hidden(),
            guide("electrical", "Electrical Burn", "बिजली जलना"),
        ]);
        let catalog = Catalog::from_json(&json).unwrap();

        let ids: Vec<&str> = catalog.list_summaries().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["oil", "electrical"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.hidden_count(), 1);
    }

    #[test]
    fn hidden_guides_remain_reachable_by_id() {
        let json = document_json(vec![
            guide("oil", "Hot Oil Burn", "तेल जलना"),
            guide("wax", "Hot Wax Burn", "मोम से जलना").hidden(),
        ]);
        let catalog = Catalog::from_json(&json).unwrap();

        assert!(catalog.list_summaries().iter().all(|s| s.id != "wax"));
        let detail = catalog.get_detail_by_id("wax").expect("hidden guide by id");
        assert_eq!(detail.title.en, "Hot Wax Burn");
    }

    #[test]
    fn lookup_is_exact() {
        let json = document_json(vec![guide("electrical", "Electrical Burn", "बिजली जलना")]);
        let catalog = Catalog::from_json(&json).unwrap();

        assert!(catalog.get_detail_by_id("electrical").is_some());
        assert!(catalog.get_detail_by_id("Electrical").is_none());
        assert!(catalog.get_detail_by_id(" electrical").is_none());
        assert!(catalog.get_detail_by_id("missing").is_none());
        assert!(catalog.get_detail_by_id("").is_none());
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let json = document_json(vec![
            guide("oil", "Hot Oil Burn", "तेल जलना"),
            guide("iron", "Iron Burn", "इस्त्री से जलना"),
        ]);
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.list_summaries(), catalog.list_summaries());
    }

    #[test]
    fn duplicate_ids_fail_loading() {
        let json = document_json(vec![
            guide("oil", "Hot Oil Burn", "तेल जलना"),
            guide("oil", "Oil Again", "फिर से तेल"),
        ]);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "oil"));
    }

    #[test]
    fn empty_translation_fails_loading() {
        let json = document_json(vec![guide("oil", "Hot Oil Burn", "  ")]);
        let err = Catalog::from_json(&json).unwrap_err();
        match err {
            CatalogError::Invalid { guide, message } => {
                assert_eq!(guide, "oil");
                assert_eq!(message, "title.hi is empty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_step_text_names_the_step() {
        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.steps[1].description.en.clear();
        let err = Catalog::from_json(&document_json(vec![raw])).unwrap_err();
        assert!(err.to_string().contains("steps[1].description.en is empty"));
    }

    fn rejection(raw: crate::test_support::Fixture) -> (String, String) {
        match Catalog::from_json(&document_json(vec![raw])) {
            Err(CatalogError::Invalid { guide, message }) => (guide, message),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("guide should be rejected"),
        }
    }

    #[test]
    fn blank_id_fails_loading() {
        let (id, message) = rejection(guide("  ", "Hot Oil Burn", "तेल जलना"));
        assert_eq!(id, "  ");
        assert_eq!(message, "id is empty");
    }

    #[test]
    fn empty_images_fail_loading() {
        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.image_url.clear();
        assert_eq!(rejection(raw).1, "imageUrl is empty");

        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.hero_image = " ".to_string();
        assert_eq!(rejection(raw).1, "heroImage is empty");

        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.dos[0].image.clear();
        assert_eq!(rejection(raw).1, "dos[0].image is empty");

        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.donts[1].image.clear();
        assert_eq!(rejection(raw).1, "donts[1].image is empty");
    }

    #[test]
    fn empty_action_text_names_the_item() {
        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.dos[2].text.hi.clear();
        assert_eq!(rejection(raw), ("oil".to_string(), "dos[2].text.hi is empty".to_string()));
    }

    #[test]
    fn empty_warning_fails_loading() {
        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.warnings[0].en = "\t".to_string();
        assert_eq!(rejection(raw).1, "warnings[0].en is empty");
    }

    #[test]
    fn empty_subtitle_fails_loading() {
        let mut raw = guide("oil", "Hot Oil Burn", "तेल जलना");
        raw.0.subtitle.en.clear();
        assert_eq!(rejection(raw).1, "subtitle.en is empty");
    }

    #[test]
    fn blank_video_id_fails_loading() {
        let mut raw = guide("electrical", "Electrical Burn", "बिजली जलना");
        raw.0.video = Some(VideoEmbed {
            provider: VideoProvider::Youtube,
            id: " ".to_string(),
        });
        assert_eq!(rejection(raw).1, "video.id is empty");
    }

    #[test]
    fn first_violation_aborts_loading() {
        let mut bad = guide("iron", "Iron Burn", "इस्त्री से जलना");
        bad.0.steps[0].title.en.clear();
        let json = document_json(vec![guide("oil", "Hot Oil Burn", "तेल जलना"), bad]);
        match Catalog::from_json(&json) {
            Err(CatalogError::Invalid { guide, message }) => {
                assert_eq!(guide, "iron");
                assert_eq!(message, "steps[0].title.en is empty");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("catalog should not be built"),
        }
    }

    #[test]
    fn unknown_guide_field_fails_loading() {
        let mut document: serde_json::Value =
            serde_json::from_str(&document_json(vec![guide("oil", "Hot Oil Burn", "तेल जलना")]))
                .unwrap();
        document["guides"][0]["priority"] = serde_json::json!(1);
        let json = serde_json::to_string(&document).unwrap();
        assert!(matches!(Catalog::from_json(&json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn missing_field_fails_loading() {
        let json = r#"{"guides": [{"id": "oil", "title": {"en": "a", "hi": "b"}}]}"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_path(Path::new("/nonexistent/burns-data.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/burns-data.json"));
    }

    #[test]
    fn loads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("burns-data.json");
        let json = document_json(vec![guide("oil", "Hot Oil Burn", "तेल जलना")]);
        std::fs::write(&path, &json).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.fingerprint(), Catalog::from_json(&json).unwrap().fingerprint());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = document_json(vec![guide("oil", "Hot Oil Burn", "तेल जलना")]);
        let b = document_json(vec![guide("oil", "Hot Oil Burns", "तेल जलना")]);
        let fa = Catalog::from_json(&a).unwrap().fingerprint().to_string();
        let fb = Catalog::from_json(&b).unwrap().fingerprint().to_string();
        assert_eq!(fa.len(), 64);
        assert_ne!(fa, fb);
    }

    #[test]
    fn bundled_document_loads() {
        let catalog = Catalog::bundled().expect("bundled document should be valid");
        assert!(catalog.list_summaries().len() >= 10);

        let mut seen = std::collections::HashSet::new();
        for summary in catalog.list_summaries() {
            assert!(seen.insert(summary.id.as_str()), "duplicate id {}", summary.id);
        }

        let electrical = catalog.get_detail_by_id("electrical").expect("electrical guide");
        assert!(!electrical.dos.is_empty());
        assert!(electrical.steps.len() >= 2);
        assert!(electrical.video.is_some());
        assert!(catalog.list_summaries().iter().any(|s| s.id == "oil"));
    }

    #[test]
    fn bundled_hidden_guides_are_unlisted() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.hidden_count() >= 1);
        assert_eq!(
            catalog.list_summaries().len() + catalog.hidden_count(),
            catalog.len()
        );
        assert!(catalog.list_summaries().iter().all(|s| s.id != "wax"));
        assert!(catalog.get_detail_by_id("wax").is_some());
    }
}
