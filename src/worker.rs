//! Offloaded execution of the pure pipeline.
//!
//! Same input, same output as [`crate::pipeline::generate`]; the only
//! difference is where the work runs. A timeout abandons the pending result
//! and reports a structured error; nothing is retried here.

use std::time::Duration;

use crate::error::{FigxError, Result};
use crate::pipeline::{generate, GenerationOutcome, GenerationRequest};

/// Run the pipeline on a blocking worker thread, bounded by `timeout`.
pub async fn generate_with_timeout(
    request: GenerationRequest,
    timeout: Duration,
) -> Result<GenerationOutcome> {
    let handle = tokio::task::spawn_blocking(move || generate(&request));

    match tokio::time::timeout(timeout, handle).await {
        Err(_) => Err(FigxError::generation(format!(
            "generation timed out after {}s",
            timeout.as_secs()
        ))),
        Ok(Err(join_error)) => Err(FigxError::generation(format!(
            "generation task failed: {join_error}"
        ))),
        Ok(Ok(result)) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::figma::FigmaFileData;
    use crate::types::options::GenerationOptions;
    use serde_json::json;

    fn request() -> GenerationRequest {
        let data: FigmaFileData = serde_json::from_value(json!({
            "document": {"id": "0:1", "name": "Root", "type": "FRAME"},
            "name": "Worker File",
            "lastModified": "2024-01-01T00:00:00Z",
            "version": "1",
            "role": "viewer",
            "editorType": "figma"
        }))
        .expect("parse worker data");

        GenerationRequest {
            data,
            file_key: "WORK1".to_string(),
            node_id: None,
            css_text: None,
            options: GenerationOptions::default(),
        }
    }

    #[tokio::test]
    async fn offloaded_generation_matches_in_process_output() {
        let inline = generate(&request()).expect("inline generate");
        let offloaded = generate_with_timeout(request(), Duration::from_secs(30))
            .await
            .expect("offloaded generate");

        // Timestamps differ; everything else must match.
        assert_eq!(inline.statistics.total_nodes, offloaded.statistics.total_nodes);
        assert_eq!(inline.download_file_name, offloaded.download_file_name);
        assert_eq!(
            inline.generated.metadata.file_key,
            offloaded.generated.metadata.file_key
        );
    }

    #[tokio::test]
    async fn zero_timeout_reports_structured_error() {
        // A wide document keeps the blocking task busy well past the
        // already-expired deadline.
        let mut wide = request();
        if let Some(document) = wide.data.document.as_mut() {
            document.children = (0..20_000)
                .map(|i| crate::types::figma::FigmaNode {
                    id: Some(format!("1:{i}")),
                    name: Some(format!("Child {i}")),
                    node_type: Some("TEXT".to_string()),
                    characters: Some("padding text for a slow serialization".to_string()),
                    ..Default::default()
                })
                .collect();
        }

        let err = generate_with_timeout(wide, Duration::from_secs(0))
            .await
            .expect_err("zero timeout must fail");
        match err {
            FigxError::Generation(message) => assert!(message.contains("timed out")),
            other => panic!("expected generation error, got {other:?}"),
        }
    }
}
