use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Display language. The set is closed: every piece of content carries both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "EN", alias = "En")]
    En,
    #[serde(alias = "HI", alias = "Hi")]
    Hi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// The other language, as flipped by the language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}

/// English and Hindi renditions of the same text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BilingualText {
    pub en: String,
    pub hi: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }
}

/// A single do/don't card: an illustration and its instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionItem {
    /// Static image asset, e.g. "./images/oil/dos/step-1.jpg"
    pub image: String,
    pub text: BilingualText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: BilingualText,
    pub description: BilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    Youtube,
}

/// A video embedded between the immediate and further actions of a guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VideoEmbed {
    pub provider: VideoProvider,
    /// Provider-specific video id, e.g. a YouTube video id
    pub id: String,
}

/// Listing form of a guide, shown on the home screen and searched over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSummary {
    pub id: String,
    pub title: BilingualText,
    pub description: BilingualText,
    pub image_url: String,
}

/// Full content of a single guide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDetail {
    pub id: String,
    pub title: BilingualText,
    pub subtitle: BilingualText,
    pub hero_image: String,
    /// Recommended actions, in display order
    pub dos: Vec<ActionItem>,
    /// Prohibited actions, in display order
    pub donts: Vec<ActionItem>,
    /// Sequential procedure, displayed 1-indexed
    pub steps: Vec<Step>,
    /// Conditions that warrant going to hospital
    pub warnings: Vec<BilingualText>,
    pub video: Option<VideoEmbed>,
}

/// A guide exactly as stored in the document, including the `hidden` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawGuide {
    pub id: String,
    pub title: BilingualText,
    pub description: BilingualText,
    pub image_url: String,
    pub subtitle: BilingualText,
    pub hero_image: String,
    #[serde(default)]
    pub hidden: bool,
    pub dos: Vec<ActionItem>,
    pub donts: Vec<ActionItem>,
    pub steps: Vec<Step>,
    pub warnings: Vec<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoEmbed>,
}

impl RawGuide {
    pub fn summary(&self) -> GuideSummary {
        GuideSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }

    pub fn into_detail(self) -> GuideDetail {
        GuideDetail {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            hero_image: self.hero_image,
            dos: self.dos,
            donts: self.donts,
            steps: self.steps,
            warnings: self.warnings,
            video: self.video,
        }
    }
}

/// Top-level shape of `burns-data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuideDocument {
    pub guides: Vec<RawGuide>,
}
