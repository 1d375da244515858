//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the static frontend directory is missing; the API keeps working
/// but the page and its assets will 404.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => anyhow::bail!("{frontend_dir} exists but is not a directory"),
        Err(_) => warn!(%frontend_dir, "frontend assets directory not found; static assets may 404"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dir_is_only_a_warning() {
        assert!(ensure_env("/definitely/not/here").await.is_ok());
    }

    #[tokio::test]
    async fn file_in_place_of_dir_is_an_error() {
        let tmp = std::env::temp_dir().join(format!("techsite_env_{}", std::process::id()));
        tokio::fs::write(&tmp, b"x").await.unwrap();
        assert!(ensure_env(tmp.to_str().unwrap()).await.is_err());
        let _ = tokio::fs::remove_file(&tmp).await;
    }
}
