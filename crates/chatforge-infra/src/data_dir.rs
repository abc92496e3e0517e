//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `CHATFORGE_DATA_DIR` environment variable
/// 2. `~/.chatforge` under the platform home directory
/// 3. `./.chatforge` as a last resort
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHATFORGE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".chatforge"),
        None => PathBuf::from(".chatforge"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_ends_with_chatforge() {
        let dir = resolve_data_dir();
        assert!(dir.to_string_lossy().contains("chatforge"));
    }
}
