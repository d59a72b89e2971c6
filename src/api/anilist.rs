use const_format::formatcp;
use serde::Serialize;
use serde_with::skip_serializing_none;
use url::Url;

use crate::{
    errors::ApiError,
    objects::{AniListUser, AnimeProgress, AuthUrl, Envelope, Opaque, TokenExchange},
    Client, API_PREFIX, RUNTIME,
};

const API_ANILIST_USER: &str = formatcp!("{API_PREFIX}/anilist/user");
const API_ANILIST_LIST: &str = formatcp!("{API_PREFIX}/anilist/list");
const API_ANILIST_PROGRESS: &str = formatcp!("{API_PREFIX}/anilist/progress");
const API_ANILIST_AUTH_URL: &str = formatcp!("{API_PREFIX}/anilist/auth/url");
const API_ANILIST_AUTH_TOKEN: &str = formatcp!("{API_PREFIX}/anilist/auth/token");

pub struct AniListApi {
    client: Client,
}

impl AniListApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The authenticated user's profile
    pub fn user(&self) -> AniListUserGet {
        AniListUserGet {
            client: self.client.clone(),
        }
    }

    /// The authenticated user's tracked list, optionally filtered by status
    pub fn list(&self) -> AniListList {
        AniListList {
            client: self.client.clone(),
            status: None,
        }
    }

    /// Push watched episode count (and optionally a new list status) for one entry
    pub fn update_progress(&self, progress: AnimeProgress) -> AniListProgress {
        AniListProgress {
            client: self.client.clone(),
            progress,
        }
    }

    /// The url to send the user to for authorization
    pub fn auth_url(&self) -> AniListAuthUrl {
        AniListAuthUrl {
            client: self.client.clone(),
        }
    }

    /// Trade the authorization code from the redirect for a session
    pub fn exchange_token(&self, code: &str) -> AniListTokenExchange {
        AniListTokenExchange {
            client: self.client.clone(),
            code: code.to_owned(),
        }
    }
}

pub struct AniListUserGet {
    client: Client,
}

impl AniListUserGet {
    pub async fn send(self) -> Result<Envelope<AniListUser>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANILIST_USER)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<AniListUser>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct AniListList {
    #[serde(skip)]
    client: Client,

    /// e.g. `CURRENT` or `COMPLETED`. See [`crate::objects::MediaListStatus`].
    status: Option<String>,
}

impl AniListList {
    pub fn status(mut self, status: impl AsRef<str>) -> Self {
        self.status = Some(status.as_ref().to_owned());
        self
    }

    fn url(&self) -> Result<Url, ApiError> {
        let mut url = self.client.request().url(API_ANILIST_LIST)?;

        let query = serde_qs::to_string(self)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    pub async fn send(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        let url = self.url()?;

        self.client.request().get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct AniListProgress {
    client: Client,
    progress: AnimeProgress,
}

impl AniListProgress {
    /// The backend answers with a `message` rather than data
    pub async fn send(self) -> Result<Envelope<Opaque>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANILIST_PROGRESS)?;

        request.post(url, &self.progress).await
    }

    pub fn send_blocking(self) -> Result<Envelope<Opaque>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct AniListAuthUrl {
    client: Client,
}

impl AniListAuthUrl {
    pub async fn send(self) -> Result<Envelope<AuthUrl>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANILIST_AUTH_URL)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<AuthUrl>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

#[derive(Serialize)]
pub struct AniListTokenExchange {
    #[serde(skip)]
    client: Client,
    code: String,
}

impl AniListTokenExchange {
    pub async fn send(self) -> Result<Envelope<TokenExchange>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANILIST_AUTH_TOKEN)?;

        request.post(url, &self).await
    }

    pub fn send_blocking(self) -> Result<Envelope<TokenExchange>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
