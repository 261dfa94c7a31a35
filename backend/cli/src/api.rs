//! HTTP client for the identification endpoint.

use anyhow::{bail, Context, Result};
use leafscan_core::{IdentificationResult, ImageAsset};
use reqwest::multipart::{Form, Part};

/// Client-side wrapper around `POST /api/identify`.
pub struct IdentifyClient {
    base_url: String,
    client: reqwest::Client,
}

impl IdentifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Upload one asset and wait for the identification.
    ///
    /// Network errors and non-2xx responses collapse to one "try again"
    /// error for the user; the status code stays in the message for logs.
    pub async fn identify(&self, asset: &ImageAsset) -> Result<IdentificationResult> {
        let part = Part::bytes(asset.data().to_vec())
            .file_name("capture.img")
            .mime_str(asset.mime())
            .context("asset carried an invalid MIME type")?;
        let form = Form::new().part("image", part);

        let resp = self
            .client
            .post(format!("{}/api/identify", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("identification request failed, try again")?;
        if !resp.status().is_success() {
            bail!("identification failed (status {}), try again", resp.status());
        }
        resp.json()
            .await
            .context("identification reply was malformed, try again")
    }
}
