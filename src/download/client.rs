use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;

/// FCI nomenclature breed list (federation source).
pub const FCI_CSV_URL: &str =
    "https://raw.githubusercontent.com/paiv/fci-breeds/main/fci-breeds.csv";

/// AKC breed dataset (kennel-club source). Its first header cell is blank;
/// the breed name is column 0.
pub const AKC_CSV_URL: &str =
    "https://raw.githubusercontent.com/tmfilho/akcdata/master/data/akc-data-latest.csv";

pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("bitb-tools/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch one source CSV body. Any non-success status is as fatal as a
    /// transport failure and carries the status and URL.
    pub fn fetch_csv(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Fetch failed for {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Fetch failed {} for {}", status.as_u16(), url);
        }

        response
            .text()
            .with_context(|| format!("Failed to read response body from {url}"))
    }
}

impl Default for SourceClient {
    fn default() -> Self {
        Self::new().expect("Failed to create HTTP client")
    }
}
