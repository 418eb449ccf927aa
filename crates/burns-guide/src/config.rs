use std::path::PathBuf;

use burns_catalog::mcp_api::EmergencyContact;
use burns_catalog::search::QueryPolicy;
use burns_catalog::Language;

use crate::error::AppError;

const DEFAULT_EMERGENCY_PHONE: &str = "+915812510204";
const DEFAULT_EMERGENCY_LABEL: &str = "0581-2510204";

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Guide document to serve. `None` serves the document bundled in the binary.
    pub data_path: Option<PathBuf>,
    /// Language used when a tool call does not name one.
    pub default_lang: Language,
    pub query_policy: QueryPolicy,
    pub emergency_phone: String,
    pub emergency_label: String,
    /// Serve MCP over TCP on this address instead of stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// All optional:
    /// - `BURNS_DATA_PATH`: JSON guide document (must exist if set)
    /// - `BURNS_DEFAULT_LANG`: "en" (default) or "hi"
    /// - `BURNS_TRIM_QUERY`: trim search queries, "true"/"false"/"1"/"0" (default: false)
    /// - `BURNS_EMERGENCY_PHONE` / `BURNS_EMERGENCY_LABEL`: hospital emergency line
    /// - `MCP_TCP_LISTEN_ADDR`: e.g. "127.0.0.1:7410"
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_path = lookup("BURNS_DATA_PATH").map(PathBuf::from);
        if let Some(path) = &data_path {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "BURNS_DATA_PATH points to a missing file: {}",
                    path.display()
                )));
            }
        }

        let default_lang = match lookup("BURNS_DEFAULT_LANG") {
            Some(code) => code
                .parse::<Language>()
                .map_err(|e| AppError::Config(format!("BURNS_DEFAULT_LANG: {e}")))?,
            None => Language::default(),
        };

        let query_policy = match lookup("BURNS_TRIM_QUERY").as_deref().map(str::trim) {
            None | Some("") | Some("false") | Some("0") => QueryPolicy::Literal,
            Some("true") | Some("1") => QueryPolicy::Trim,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "BURNS_TRIM_QUERY must be true/false/1/0, got '{other}'"
                )))
            }
        };

        Ok(Self {
            data_path,
            default_lang,
            query_policy,
            emergency_phone: lookup("BURNS_EMERGENCY_PHONE")
                .unwrap_or_else(|| DEFAULT_EMERGENCY_PHONE.to_string()),
            emergency_label: lookup("BURNS_EMERGENCY_LABEL")
                .unwrap_or_else(|| DEFAULT_EMERGENCY_LABEL.to_string()),
            tcp_listen_addr: lookup("MCP_TCP_LISTEN_ADDR"),
        })
    }

    pub fn emergency_contact(&self) -> EmergencyContact {
        EmergencyContact {
            label: format!("Call Emergency: {}", self.emergency_label),
            phone_uri: format!("tel:{}", self.emergency_phone),
        }
    }
}
