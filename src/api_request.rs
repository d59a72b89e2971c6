use std::{fmt, sync::Arc};

use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::{errors::ApiError, utils::IsJson};

#[derive(Copy, Clone, Debug)]
pub(crate) enum RequestMethod {
    Get,
    Post,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct ApiRequest {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiRequest {
    pub fn new(http: reqwest::Client, base_url: Arc<str>) -> Self {
        Self { http, base_url }
    }

    /// Join an endpoint path onto the base url
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{path}", self.base_url))?)
    }

    pub async fn get<D>(&self, url: Url) -> Result<D, ApiError>
    where
        D: DeserializeOwned,
    {
        self.api_request(url, RequestMethod::Get, None).await
    }

    pub async fn post<B, D>(&self, url: Url, body: &B) -> Result<D, ApiError>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        self.api_request(url, RequestMethod::Post, Some(body)).await
    }

    async fn api_request<D>(
        &self,
        url: Url,
        method: RequestMethod,
        body: Option<Vec<u8>>,
    ) -> Result<D, ApiError>
    where
        D: DeserializeOwned,
    {
        let request = match method {
            RequestMethod::Get => self.http.get(url.clone()),
            RequestMethod::Post => self.http.post(url.clone()),
        }
        .header(CONTENT_TYPE, "application/json");

        let request = if let Some(body) = body {
            request.body(body)
        } else {
            request
        };

        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;

        debug!(%method, %url, status = status.as_u16(), response = text.as_str());

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "api request failed");
            return Err(ApiError::from_status(status));
        }

        if !text.is_json() {
            return Err(ApiError::Api(text));
        }

        let data = serde_json::from_str(&text)?;

        Ok(data)
    }
}
