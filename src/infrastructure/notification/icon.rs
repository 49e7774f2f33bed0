//! Embedded notification icon
//!
//! Lola's portrait ships inside the binary as base64 text and is written
//! to the cache directory the first time a notification needs it.

use std::io;
use std::path::{Path, PathBuf};

use base64::Engine;
use tokio::fs;

/// Base64 encoded PNG portrait
const LOLA_PNG_BASE64: &str = include_str!("../../../assets/lola.png.b64");

/// File name of the materialized icon
pub const ICON_FILE_NAME: &str = "lola.png";

/// Directory the icon is written to: `<cache dir>/lola-announce`,
/// or the system temp dir when no cache dir is known
pub fn default_icon_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("lola-announce")
}

/// Decode the embedded portrait
pub fn icon_bytes() -> io::Result<Vec<u8>> {
    let compact: String = LOLA_PNG_BASE64.split_whitespace().collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the portrait into `dir` unless it is already there.
///
/// # Returns
/// Path of the icon file
pub async fn ensure_icon(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(ICON_FILE_NAME);
    if fs::try_exists(&path).await? {
        return Ok(path);
    }

    fs::create_dir_all(dir).await?;
    fs::write(&path, icon_bytes()?).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn embedded_icon_is_png() {
        let bytes = icon_bytes().unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn default_dir_is_namespaced() {
        assert!(default_icon_dir().ends_with("lola-announce"));
    }

    #[tokio::test]
    async fn ensure_icon_writes_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");

        let path = ensure_icon(&target).await.unwrap();
        assert_eq!(path, target.join(ICON_FILE_NAME));
        assert!(std::fs::read(&path).unwrap().starts_with(PNG_SIGNATURE));

        // An existing file is left untouched
        std::fs::write(&path, b"custom").unwrap();
        let again = ensure_icon(&target).await.unwrap();
        assert_eq!(again, path);
        assert_eq!(std::fs::read(&path).unwrap(), b"custom");
    }
}
