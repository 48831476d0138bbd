//! Loading the page definition.

use std::path::{Path, PathBuf};
use thiserror::Error;

use brochure_types::Page;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read page definition at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse page definition at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse a page definition from TOML text.
///
/// Structural validation (unique section ids, known field names, parsed
/// hrefs) happens inside the `Page` deserializer, so a successful parse is
/// a fully-valid page.
pub fn parse_page(content: &str) -> Result<Page, toml::de::Error> {
    toml::from_str(content)
}

/// Read and parse a page definition file.
pub fn load_page(path: &Path) -> Result<Page, SiteError> {
    let content = std::fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page(&content).map_err(|source| SiteError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
