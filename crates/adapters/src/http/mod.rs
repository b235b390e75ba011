use fotobox_application::{ApplicationError, ImageHost};
use fotobox_domain::Raster;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use crate::codec;

/// Image host speaking the common unsigned-upload protocol: a multipart
/// POST with `upload_preset` and `file` fields, answered with JSON carrying
/// a `secure_url`. Failures surface as `Network` errors; retry is the
/// caller's decision.
#[derive(Debug)]
pub struct HttpImageHost {
    endpoint: String,
    upload_preset: String,
    client: Client,
}

impl HttpImageHost {
    pub fn new(endpoint: String, upload_preset: String) -> Self {
        Self {
            endpoint,
            upload_preset,
            client: Client::new(),
        }
    }
}

impl ImageHost for HttpImageHost {
    fn upload(&self, image: &Raster) -> Result<String, ApplicationError> {
        let bytes = codec::encode_jpeg(image)?;
        let part = Part::bytes(bytes)
            .file_name("image.jpg")
            .mime_str("image/jpeg")
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        let form = Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|error| ApplicationError::Network(error.to_string()))?
            .error_for_status()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        secure_url_from_response(&body)
    }

    fn download(&self, url: &str) -> Result<Raster, ApplicationError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| ApplicationError::Network(error.to_string()))?
            .error_for_status()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        let bytes = response
            .bytes()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        codec::decode_bytes(&bytes)
    }
}

fn secure_url_from_response(body: &serde_json::Value) -> Result<String, ApplicationError> {
    body.get("secure_url")
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            ApplicationError::Network("upload response is missing secure_url".to_string())
        })
}
