use crate::config::ClassifierConfig;
use crate::error::ClassifyError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

/// Anything that can turn image bytes into a label text.
pub trait Classify {
    /// Send `image` for classification and return the raw response body.
    fn classify(&self, image: &[u8]) -> Result<String, ClassifyError>;
}

/// Classifier backed by a remote HTTP endpoint.
///
/// Every call is one blocking `POST` with the image as the body. Nothing is
/// retried; errors go straight back to the caller.
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
    content_type: String,
}

impl HttpClassifier {
    pub fn new(cfg: &ClassifierConfig) -> Result<Self, ClassifyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClassifyError::from_reqwest(&cfg.endpoint, e))?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            content_type: cfg.content_type.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classify for HttpClassifier {
    fn classify(&self, image: &[u8]) -> Result<String, ClassifyError> {
        tracing::debug!("POST {} ({} bytes)", self.endpoint, image.len());
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, &self.content_type)
            .body(image.to_vec())
            .send()
            .map_err(|e| ClassifyError::from_reqwest(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::InvalidResponse {
                endpoint: self.endpoint.clone(),
                reason: format!("HTTP {status}"),
            });
        }

        let body = response
            .text()
            .map_err(|e| ClassifyError::from_reqwest(&self.endpoint, e))?;
        tracing::debug!("{} answered {:?}", self.endpoint, body);
        Ok(body)
    }
}
