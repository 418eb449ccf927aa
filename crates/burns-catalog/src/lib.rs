pub mod assets;
pub mod catalog;
pub mod error;
pub mod localize;
pub mod mcp_api;
pub mod model;
pub mod search;

#[cfg(test)]
mod test_support;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use model::{GuideDetail, GuideSummary, Language};
