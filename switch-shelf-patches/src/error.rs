/// Errors that can occur while fetching or parsing the patch table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Markup parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    #[error("No patch table found in page")]
    MissingTable,
}
