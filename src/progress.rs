use std::sync::Arc;

/// Callback for fetch/generation progress lines (verbose mode routes these
/// to stderr).
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;
