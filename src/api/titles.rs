use const_format::formatcp;

use crate::{
    errors::ApiError,
    objects::{Envelope, MatchRequest, NormalizeRequest, NormalizedTitle, TitleMatch},
    Client, API_PREFIX, RUNTIME,
};

const API_TITLES_MATCH: &str = formatcp!("{API_PREFIX}/titles/match");
const API_TITLES_NORMALIZE: &str = formatcp!("{API_PREFIX}/titles/normalize");

pub struct TitlesApi {
    client: Client,
}

impl TitlesApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fuzzy match `query` against `candidates`.
    ///
    /// When nothing scores high enough the backend answers `success: false` with a message
    /// and no data.
    pub fn matches(&self, query: &str, candidates: &[String]) -> TitlesMatch {
        TitlesMatch {
            client: self.client.clone(),
            query: query.to_owned(),
            candidates: candidates.to_vec(),
        }
    }

    pub fn normalize(&self, title: &str) -> TitlesNormalize {
        TitlesNormalize {
            client: self.client.clone(),
            title: title.to_owned(),
        }
    }
}

pub struct TitlesMatch {
    client: Client,
    query: String,
    candidates: Vec<String>,
}

impl TitlesMatch {
    pub async fn send(self) -> Result<Envelope<TitleMatch>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_TITLES_MATCH)?;

        let body = MatchRequest {
            query: &self.query,
            candidates: &self.candidates,
        };

        request.post(url, &body).await
    }

    pub fn send_blocking(self) -> Result<Envelope<TitleMatch>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct TitlesNormalize {
    client: Client,
    title: String,
}

impl TitlesNormalize {
    pub async fn send(self) -> Result<Envelope<NormalizedTitle>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_TITLES_NORMALIZE)?;

        request
            .post(url, &NormalizeRequest { title: &self.title })
            .await
    }

    pub fn send_blocking(self) -> Result<Envelope<NormalizedTitle>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
