//! HTTP client for the Judge0 API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::Judge0Config;
use crate::constants::{RAPIDAPI_HOST_HEADER, RAPIDAPI_KEY_HEADER};

use super::{
    encoding,
    types::{CreateSubmission, SubmissionResult, SubmissionToken},
    ExecutionBackend, TransportError,
};

/// Judge0 client authenticated through RapidAPI headers
#[derive(Clone)]
pub struct Judge0Client {
    http: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl Judge0Client {
    pub fn new(config: &Judge0Config) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(RAPIDAPI_KEY_HEADER, &self.api_key)
            .header(RAPIDAPI_HOST_HEADER, &self.api_host)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, TransportError> {
        let response = self.authorized(builder).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ExecutionBackend for Judge0Client {
    async fn submit(&self, language_id: u32, source_code: &str) -> Result<String, TransportError> {
        let body = CreateSubmission {
            language_id,
            source_code: encoding::encode(source_code),
            stdin: encoding::encode(""),
        };

        let request = self
            .http
            .post(self.url("/submissions?base64_encoded=true&wait=false"))
            .json(&body);
        let created: SubmissionToken = self.send_json(request).await?;

        tracing::info!(
            token = %created.token,
            language_id,
            "Submission created"
        );

        Ok(created.token)
    }

    async fn fetch(&self, token: &str) -> Result<SubmissionResult, TransportError> {
        let request = self.http.get(self.url(&format!(
            "/submissions/{}?base64_encoded=true&fields=*",
            token
        )));
        self.send_json(request).await
    }

    async fn list_languages(&self) -> Result<Vec<serde_json::Value>, TransportError> {
        let request = self.http.get(self.url("/languages"));
        self.send_json(request).await
    }
}
