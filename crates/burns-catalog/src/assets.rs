//! Build-time maintenance of the image paths in a guide document.
//!
//! Relinking works on the raw [`GuideDocument`] before it is bundled; a loaded
//! [`Catalog`] is never modified. The rewritten document is validated by loading
//! it as a catalog before it is written back.
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::{ActionItem, GuideDocument};

/// Ordered (pattern, image) pairs; the first pattern found in an action's
/// lower-cased English text wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionImageMap {
    entries: Vec<(String, String)>,
}

const DEFAULT_ACTION_IMAGES: &[(&str, &str)] = &[
    ("cool under running water", "./images/actions/cool-water.jpg"),
    ("remove rings, watch", "./images/actions/remove-jewelry.jpg"),
    ("remove jewelry", "./images/actions/remove-jewelry.jpg"),
    ("apply aloe vera", "./images/actions/apply-aloe.jpg"),
    ("cover with clean", "./images/actions/cover-bandage.jpg"),
    ("drink water", "./images/actions/drink-water.jpg"),
    ("take painkiller", "./images/actions/take-painkiller.jpg"),
    ("remove wet clothing", "./images/actions/remove-jewelry.jpg"),
    ("call emergency", "./images/actions/cool-water.jpg"),
    ("check for breathing", "./images/actions/cool-water.jpg"),
    ("turn off power", "./images/actions/cool-water.jpg"),
    ("extinguish candle", "./images/actions/cool-water.jpg"),
    ("get out of sun", "./images/actions/cool-water.jpg"),
    ("take cool shower", "./images/actions/cool-water.jpg"),
    ("move to safe area", "./images/actions/cool-water.jpg"),
    ("remove contaminated clothing", "./images/actions/remove-jewelry.jpg"),
    ("flush with water", "./images/actions/cool-water.jpg"),
    ("keep victim warm", "./images/actions/cover-bandage.jpg"),
    ("don't apply ice", "./images/actions/no-ice.jpg"),
    ("don't use butter", "./images/actions/no-butter.jpg"),
    ("don't apply toothpaste", "./images/actions/no-toothpaste.jpg"),
    ("don't burst blisters", "./images/actions/no-burst-blisters.jpg"),
    ("don't use cotton", "./images/actions/no-cotton.jpg"),
    ("don't peel", "./images/actions/no-cotton.jpg"),
    ("don't touch victim", "./images/actions/no-ice.jpg"),
    ("don't use water near", "./images/actions/no-ice.jpg"),
    ("don't move victim", "./images/actions/no-ice.jpg"),
    ("don't pull off hot wax", "./images/actions/no-ice.jpg"),
    ("don't relight", "./images/actions/no-ice.jpg"),
    ("don't rub eyes", "./images/actions/no-ice.jpg"),
    ("don't go back in sun", "./images/actions/no-ice.jpg"),
    ("don't neutralize", "./images/actions/no-ice.jpg"),
    ("don't apply creams", "./images/actions/no-butter.jpg"),
    ("don't delay", "./images/actions/no-ice.jpg"),
    ("don't ignore", "./images/actions/no-ice.jpg"),
];

impl Default for ActionImageMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACTION_IMAGES
                .iter()
                .map(|(pattern, image)| (pattern.to_string(), image.to_string())),
        )
    }
}

impl ActionImageMap {
    /// Patterns are matched lower-cased.
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(pattern, image)| (pattern.to_lowercase(), image))
                .collect(),
        }
    }

    pub fn image_for(&self, action_text: &str) -> Option<&str> {
        let text = action_text.to_lowercase();
        self.entries
            .iter()
            .find(|(pattern, _)| text.contains(pattern.as_str()))
            .map(|(_, image)| image.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RelinkStrategy<'a> {
    /// `./images/<guide>/dos/step-<n>.jpg` and `./images/<guide>/donts/step-<n>.jpg`
    Category,
    /// Shared action illustrations chosen by the action's English text.
    Action(&'a ActionImageMap),
}

/// Rewrites action images in place and returns how many paths changed.
pub fn relink(document: &mut GuideDocument, strategy: RelinkStrategy<'_>) -> usize {
    let mut changed = 0;
    for guide in &mut document.guides {
        for (section, items) in [("dos", &mut guide.dos), ("donts", &mut guide.donts)] {
            for (i, item) in items.iter_mut().enumerate() {
                let target = match strategy {
                    RelinkStrategy::Category => {
                        Some(format!("./images/{}/{section}/step-{}.jpg", guide.id, i + 1))
                    }
                    RelinkStrategy::Action(map) => map.image_for(&item.text.en).map(str::to_string),
                };
                if let Some(target) = target {
                    if set_image(item, target) {
                        changed += 1;
                    }
                }
            }
        }
    }
    changed
}

fn set_image(item: &mut ActionItem, image: String) -> bool {
    if item.image == image {
        return false;
    }
    debug!(from = %item.image, to = %image, "relinking action image");
    item.image = image;
    true
}

/// Outcome of relinking a document file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelinkReport {
    pub changed: usize,
    pub guides: usize,
    pub written: bool,
}

/// Loads `path`, relinks it, validates the result and writes it back as
/// 2-space-indented JSON unless `dry_run` is set or nothing changed.
pub fn relink_file(
    path: &Path,
    strategy: RelinkStrategy<'_>,
    dry_run: bool,
) -> Result<RelinkReport, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut document: GuideDocument = serde_json::from_str(&content)?;
    let changed = relink(&mut document, strategy);

    let output = serde_json::to_string_pretty(&document)?;
    Catalog::from_json(&output)?;

    let written = !dry_run && changed > 0;
    if written {
        std::fs::write(path, format!("{output}\n")).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    info!(
        path = %path.display(),
        changed,
        written,
        "relinked action images"
    );

    Ok(RelinkReport {
        changed,
        guides: document.guides.len(),
        written,
    })
}
