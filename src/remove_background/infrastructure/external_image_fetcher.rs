use super::error::InfrastructureError;

pub struct DefaultExternalImageFetcher;

impl DefaultExternalImageFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Fetches raw image bytes from an http(s) URL, or decodes an inline
    /// `data:` URL without touching the network.
    pub async fn fetch_image_from_url(&self, url: &str) -> Result<Vec<u8>, InfrastructureError> {
        if url.starts_with("data:") {
            let base64_data = url.split(',').nth(1).ok_or_else(|| {
                InfrastructureError::DecodingError("Invalid data URL: missing comma".to_string())
            })?;
            Ok(base64::decode(base64_data).map_err(InfrastructureError::Base64DecodeError)?)
        } else {
            let response = reqwest::get(url).await.map_err(InfrastructureError::ReqwestError)?;
            if !response.status().is_success() {
                return Err(InfrastructureError::ExternalApiError(format!(
                    "Fetching {} returned status {}",
                    url,
                    response.status()
                )));
            }
            Ok(response
                .bytes()
                .await
                .map_err(InfrastructureError::ReqwestError)?
                .to_vec())
        }
    }
}
