//! `file://` URLs read from disk.

use super::Fetch;
use crate::error::FetchError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let path = url::Url::parse(url)
            .ok()
            .and_then(|u| u.to_file_path().ok())
            .ok_or_else(|| FetchError::Io {
                path: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
            })?;
        let bytes = std::fs::read(&path).map_err(|source| FetchError::Io {
            path: path.display().to_string(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|_| FetchError::Encoding {
            url: url.to_string(),
        })
    }
}
