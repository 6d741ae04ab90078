use std::path::Path;
use thiserror::Error;
use url::Url;

use serde::{Deserialize, Serialize};

/// Classification of generation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A figma.com file or design URL
    Figma,
    /// A bare Figma file key
    Key,
    /// A local `.json` snapshot of a previously fetched API response
    Snapshot,
}

#[derive(Debug, Clone)]
pub struct ParsedResource {
    pub kind: ResourceKind,
    pub value: String,
    pub figma_info: Option<FigmaInfo>,
}

#[derive(Debug, Clone)]
pub struct FigmaInfo {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}. Hint: include http(s):// and ensure the URL is well-formed.")]
    InvalidUrl { value: String, message: String },
    #[error("Figma URL missing file key in '{url}'. Hint: use https://www.figma.com/file/<FILE_KEY>/... and node-id if needed.")]
    FigmaMissingFileKey { url: String },
    #[error("URL '{url}' is not a Figma URL. Hint: only figma.com file/design URLs can be imported.")]
    NotFigmaUrl { url: String },
    #[error("Snapshot file not found: {path}. Hint: check the path relative to the current working directory or use an absolute path.")]
    SnapshotNotFound { path: String },
    #[error("Unsupported input '{value}'. Hint: pass a Figma URL, a bare file key, or a saved API response (.json).")]
    UnsupportedInput { value: String },
}

/// Classify a generation input: a figma.com URL, a bare file key, or a
/// local JSON snapshot.
pub fn parse_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return parse_url_resource(value);
    }

    if value.ends_with(".json") {
        return parse_snapshot_resource(value);
    }

    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(ParsedResource {
            kind: ResourceKind::Key,
            value: value.to_string(),
            figma_info: Some(FigmaInfo {
                file_key: value.to_string(),
                node_id: None,
            }),
        });
    }

    Err(ResourceParseError::UnsupportedInput {
        value: value.to_string(),
    })
}

fn parse_url_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if !host.contains("figma.com") {
        return Err(ResourceParseError::NotFigmaUrl {
            url: value.to_string(),
        });
    }

    let figma_info = parse_figma_url(&url, value)?;
    Ok(ParsedResource {
        kind: ResourceKind::Figma,
        value: value.to_string(),
        figma_info: Some(figma_info),
    })
}

fn parse_figma_url(url: &Url, original: &str) -> Result<FigmaInfo, ResourceParseError> {
    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|&s| s == "file" || s == "design")
        .and_then(|i| path_segments.get(i + 1))
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::FigmaMissingFileKey {
            url: original.to_string(),
        })?;

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"));

    Ok(FigmaInfo { file_key, node_id })
}

fn parse_snapshot_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    let path = Path::new(value);
    if !path.exists() || !path.is_file() {
        return Err(ResourceParseError::SnapshotNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }

    Ok(ParsedResource {
        kind: ResourceKind::Snapshot,
        value: value.to_string(),
        figma_info: None,
    })
}
