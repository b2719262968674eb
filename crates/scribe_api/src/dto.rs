//! Request and response bodies that are not domain types.

use scribe_core::HistoryItem;
use scribe_interface::MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Default page size for `/api/history`.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Query string for `/api/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryQuery {
    /// Page size, 1 to 100
    pub limit: i64,
    /// Rows to skip, ignored when searching
    pub offset: i64,
    /// Substring to look for in topic or content
    pub search: Option<String>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
            offset: 0,
            search: None,
        }
    }
}

impl HistoryQuery {
    /// Reject out-of-range paging parameters.
    pub fn validate(&self) -> Result<(), scribe_error::ValidationError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.limit) {
            return Err(scribe_error::ValidationError::new(
                "limit",
                format!("must be between 1 and {}, got {}", MAX_PAGE_SIZE, self.limit),
            ));
        }
        if self.offset < 0 {
            return Err(scribe_error::ValidationError::new(
                "offset",
                format!("must not be negative, got {}", self.offset),
            ));
        }
        Ok(())
    }

    /// The search term, if one was given and is not empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of `/api/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Matching entries, newest first
    pub items: Vec<HistoryItem>,
    /// All rows when paging, matched rows when searching
    pub total: i64,
}

/// Body of `/api/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsResponse {
    /// Model identifiers the inference server advertises
    pub models: Vec<String>,
}

/// Body of `/api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the inference server answered its probe
    pub lm_studio_connected: bool,
    /// `healthy` or `lm_studio_disconnected`
    pub status: String,
    /// Human-readable summary
    pub message: String,
}

impl StatusResponse {
    /// Status body for a probe outcome.
    pub fn from_probe(connected: bool) -> Self {
        if connected {
            Self {
                lm_studio_connected: true,
                status: "healthy".to_string(),
                message: "LM Studio is connected".to_string(),
            }
        } else {
            Self {
                lm_studio_connected: false,
                status: "lm_studio_disconnected".to_string(),
                message: "Cannot connect to LM Studio".to_string(),
            }
        }
    }
}

/// Generic `{message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Acknowledgement text
    pub message: String,
}
