//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep the server crate importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the static frontend directory is usable; warn when it is missing.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(frontend_dir).await
}
