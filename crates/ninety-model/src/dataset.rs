//! Dataset decoding.
//!
//! The backend serves organizations in three shapes: a single object from
//! the detail endpoint, a plain array, or the paginated list envelope.
//! This module decodes any of the three into `Vec<Organization>`.

use crate::error::Result;
use crate::organization::Organization;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Paginated list envelope as served by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Total number of organizations across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Organizations on this page.
    pub results: Vec<Organization>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Page(Page),
    Many(Vec<Organization>),
    One(Organization),
}

/// Decode a JSON document into a list of organizations.
///
/// Accepts a paginated envelope, a plain array, or a single organization.
pub fn organizations_from_json(json: &str) -> Result<Vec<Organization>> {
    let document: Document = serde_json::from_str(json)?;
    Ok(match document {
        Document::Page(page) => page.results,
        Document::Many(orgs) => orgs,
        Document::One(org) => vec![org],
    })
}

/// Read and decode a JSON dataset file.
pub fn organizations_from_path(path: impl AsRef<Path>) -> Result<Vec<Organization>> {
    let json = fs::read_to_string(path)?;
    organizations_from_json(&json)
}
