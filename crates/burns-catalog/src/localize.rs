/// Single-language views of catalog content.
///
/// Clients render one language at a time, so these views resolve every bilingual
/// pair up front and shape a guide the way its page is laid out: two rows of
/// immediate/further actions, the things to avoid, numbered steps and warnings.
use schemars::JsonSchema;
use serde::Serialize;

use crate::model::{ActionItem, GuideDetail, GuideSummary, Language, VideoEmbed, VideoProvider};

/// Number of `dos` shown before the embedded video, and in the row after it.
const ACTION_ROW_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SummaryView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl SummaryView {
    pub fn new(summary: &GuideSummary, lang: Language) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.title.get(lang).to_string(),
            description: summary.description.get(lang).to_string(),
            image_url: summary.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ActionView {
    pub image: String,
    pub text: String,
}

impl ActionView {
    fn new(item: &ActionItem, lang: Language) -> Self {
        Self {
            image: item.image.clone(),
            text: item.text.get(lang).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NumberedStep {
    /// 1-based position in the procedure
    pub number: usize,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct VideoView {
    pub provider: VideoProvider,
    pub id: String,
    pub embed_url: String,
}

impl From<&VideoEmbed> for VideoView {
    fn from(video: &VideoEmbed) -> Self {
        let embed_url = match video.provider {
            VideoProvider::Youtube => {
                format!("https://www.youtube-nocookie.com/embed/{}?rel=0", video.id)
            }
        };
        Self {
            provider: video.provider,
            id: video.id.clone(),
            embed_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub hero_image: String,
    /// First row of recommended actions, shown above the video
    pub immediate_actions: Vec<ActionView>,
    /// Remaining recommended actions, in source order
    pub further_actions: Vec<ActionView>,
    pub avoid: Vec<ActionView>,
    pub steps: Vec<NumberedStep>,
    pub warnings: Vec<String>,
    pub video: Option<VideoView>,
}

impl DetailView {
    pub fn new(detail: &GuideDetail, lang: Language) -> Self {
        let split = detail.dos.len().min(ACTION_ROW_LEN);
        let (immediate, further) = detail.dos.split_at(split);

        Self {
            id: detail.id.clone(),
            title: detail.title.get(lang).to_string(),
            subtitle: detail.subtitle.get(lang).to_string(),
            hero_image: detail.hero_image.clone(),
            immediate_actions: immediate.iter().map(|a| ActionView::new(a, lang)).collect(),
            further_actions: further.iter().map(|a| ActionView::new(a, lang)).collect(),
            avoid: detail.donts.iter().map(|a| ActionView::new(a, lang)).collect(),
            steps: detail
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| NumberedStep {
                    number: i + 1,
                    title: step.title.get(lang).to_string(),
                    description: step.description.get(lang).to_string(),
                })
                .collect(),
            warnings: detail
                .warnings
                .iter()
                .map(|w| w.get(lang).to_string())
                .collect(),
            video: detail.video.as_ref().map(VideoView::from),
        }
    }
}

/// Headings of the guide page sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SectionLabels {
    pub immediate: String,
    pub avoid: String,
    pub steps: String,
    pub warnings: String,
    pub back: String,
}

impl SectionLabels {
    pub fn for_lang(lang: Language) -> Self {
        let (immediate, avoid, steps, warnings, back) = match lang {
            Language::En => (
                "Do This Immediately",
                "Never Do This",
                "Step-by-Step Guide",
                "Go to Hospital If:",
                "Back",
            ),
            Language::Hi => (
                "तुरंत यह करें",
                "यह कभी न करें",
                "चरण-दर-चरण गाइड",
                "अस्पताल जाएं यदि:",
                "वापस",
            ),
        };
        Self {
            immediate: immediate.to_string(),
            avoid: avoid.to_string(),
            steps: steps.to_string(),
            warnings: warnings.to_string(),
            back: back.to_string(),
        }
    }
}

/// The empty-search state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct NoResults {
    pub heading: String,
    pub message: String,
}

impl NoResults {
    pub fn new(query: &str, lang: Language) -> Self {
        match lang {
            Language::En => Self {
                heading: "No guides found".to_string(),
                message: format!("We couldn't find matches for \"{query}\""),
            },
            Language::Hi => Self {
                heading: "कोई गाइड नहीं मिली".to_string(),
                message: format!("हमें \"{query}\" के लिए परिणाम नहीं मिले"),
            },
        }
    }
}

pub fn not_found_message(lang: Language) -> &'static str {
    match lang {
        Language::En => "Guide not found",
        Language::Hi => "गाइड नहीं मिली",
    }
}
