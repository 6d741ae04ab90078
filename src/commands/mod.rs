mod generate;
mod tokens;
mod validate;

pub use generate::run_generate;
pub use tokens::run_tokens;
pub use validate::run_validate;

use std::path::Path;

use figx_lib::figma_client::{RetryPolicy, DEFAULT_BASE_URL};
use figx_lib::{Config, FigmaAuth, FigmaClient, FigmaFileData, FigxError, ParsedResource, ResourceKind};

use crate::progress::ProgressCallback;

/// A resolved API response plus the identifiers used to obtain it.
pub struct ResolvedInput {
    pub data: FigmaFileData,
    pub file_key: String,
    pub node_id: Option<String>,
}

/// Obtain the raw API response for a parsed input resource: read a local
/// snapshot, or fetch the file/nodes from the Figma API.
pub async fn resolve_input(
    resource: &ParsedResource,
    cli_node_id: Option<&str>,
    config: &Config,
    progress: Option<ProgressCallback>,
) -> Result<ResolvedInput, FigxError> {
    match resource.kind {
        ResourceKind::Snapshot => {
            let text = std::fs::read_to_string(&resource.value)?;
            let data: FigmaFileData = serde_json::from_str(&text)?;
            let file_key = Path::new(&resource.value)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("snapshot")
                .to_string();
            Ok(ResolvedInput {
                data,
                file_key,
                node_id: cli_node_id.map(normalize_node_id),
            })
        }
        ResourceKind::Figma | ResourceKind::Key => {
            let info = resource.figma_info.clone().ok_or_else(|| {
                FigxError::Config(format!("No file key found in '{}'", resource.value))
            })?;
            let auth = FigmaAuth::from_env().ok_or_else(|| {
                FigxError::Config(
                    "FIGMA_TOKEN environment variable is required to fetch from the Figma API"
                        .to_string(),
                )
            })?;

            let base_url = std::env::var("FIGX_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let client =
                FigmaClient::with_base_url_and_timeout(auth, base_url, config.timeouts.request)?
                    .with_retry_policy(RetryPolicy {
                        max_retries: config.retry.max_retries,
                        base_delay: config.retry.base_delay,
                    });

            let node_id = cli_node_id
                .map(normalize_node_id)
                .or_else(|| info.node_id.clone());

            if let Some(progress) = &progress {
                progress(&format!("Fetching {} from the Figma API…", info.file_key));
            }

            let data = match &node_id {
                Some(id) => {
                    let nodes = client.fetch_nodes(&info.file_key, &[id.clone()]).await?;
                    nodes.file_data_for(id).ok_or_else(|| {
                        FigxError::figma_api(
                            None,
                            format!("Node {id} not found in Figma response"),
                        )
                    })?
                }
                None => client.fetch_file(&info.file_key).await?,
            };

            Ok(ResolvedInput {
                data,
                file_key: info.file_key,
                node_id,
            })
        }
    }
}

/// Accept both the web app's `1-2` spelling and the API's `1:2`.
fn normalize_node_id(id: &str) -> String {
    if id.contains(':') {
        id.to_string()
    } else {
        id.replace('-', ":")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_node_id;

    #[test]
    fn node_ids_normalize_to_api_spelling() {
        assert_eq!(normalize_node_id("1-2"), "1:2");
        assert_eq!(normalize_node_id("12:34"), "12:34");
    }
}
