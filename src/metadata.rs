//! File metadata extraction and source URL derivation.

use serde::Serialize;

use crate::types::figma::FigmaFileData;

/// Metadata for one generation request, derived once from the API response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub file_key: String,
    pub file_name: String,
    pub last_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    pub version: String,
    pub role: String,
    pub editor_type: String,
}

/// Derive [`FileMetadata`] from a response, a file key, and an optional
/// node id. The source URL converts `:` in node ids to `-` to match the
/// Figma web app's `node-id` query parameter.
pub fn extract_metadata(
    data: &FigmaFileData,
    file_key: &str,
    node_id: Option<&str>,
) -> FileMetadata {
    let source_url = match node_id {
        Some(id) => format!(
            "https://www.figma.com/file/{file_key}?node-id={}",
            id.replace(':', "-")
        ),
        None => format!("https://www.figma.com/file/{file_key}"),
    };

    let document = data.document.as_ref();

    FileMetadata {
        file_key: file_key.to_string(),
        file_name: data.name.clone().unwrap_or_else(|| "Untitled".to_string()),
        last_modified: data.last_modified.clone().unwrap_or_default(),
        thumbnail_url: data.thumbnail_url.clone(),
        node_id: document
            .and_then(|d| d.id.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        name: document
            .and_then(|d| d.name.clone())
            .unwrap_or_else(|| "Unnamed".to_string()),
        node_type: document
            .and_then(|d| d.node_type.clone())
            .unwrap_or_else(|| "UNKNOWN".to_string()),
        source_url,
        version: data.version.clone().unwrap_or_default(),
        role: data.role.clone().unwrap_or_default(),
        editor_type: data.editor_type.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_data() -> FigmaFileData {
        serde_json::from_value(json!({
            "document": {"id": "1:2", "name": "Hero", "type": "FRAME"},
            "name": "Landing Page",
            "lastModified": "2024-03-03T10:00:00Z",
            "thumbnailUrl": "https://example.com/thumb.png",
            "version": "42",
            "role": "viewer",
            "editorType": "figma"
        }))
        .expect("parse test data")
    }

    #[test]
    fn metadata_copies_file_fields() {
        let meta = extract_metadata(&file_data(), "KEY123", None);
        assert_eq!(meta.file_key, "KEY123");
        assert_eq!(meta.file_name, "Landing Page");
        assert_eq!(meta.last_modified, "2024-03-03T10:00:00Z");
        assert_eq!(meta.node_id, "1:2");
        assert_eq!(meta.name, "Hero");
        assert_eq!(meta.node_type, "FRAME");
        assert_eq!(meta.version, "42");
    }

    #[test]
    fn source_url_without_node_id_points_at_file() {
        let meta = extract_metadata(&file_data(), "KEY123", None);
        assert_eq!(meta.source_url, "https://www.figma.com/file/KEY123");
    }

    #[test]
    fn source_url_converts_node_id_colons() {
        let meta = extract_metadata(&file_data(), "KEY123", Some("12:34"));
        assert_eq!(
            meta.source_url,
            "https://www.figma.com/file/KEY123?node-id=12-34"
        );
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let data = FigmaFileData::default();
        let meta = extract_metadata(&data, "K", None);
        assert_eq!(meta.file_name, "Untitled");
        assert_eq!(meta.node_id, "unknown");
        assert_eq!(meta.node_type, "UNKNOWN");
        assert!(meta.thumbnail_url.is_none());
    }

    #[test]
    fn serializes_with_original_field_spelling() {
        let meta = extract_metadata(&file_data(), "KEY123", Some("1:2"));
        let json = serde_json::to_string(&meta).expect("serialize metadata");
        assert!(json.contains("\"nodeID\":\"1:2\""));
        assert!(json.contains("\"sourceURL\""));
        assert!(json.contains("\"editorType\":\"figma\""));
    }
}
