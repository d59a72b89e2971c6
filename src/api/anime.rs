use const_format::formatcp;
use serde::Serialize;
use url::Url;

use crate::{
    errors::ApiError,
    objects::{Anime, AnimeList, CurrentSeason, Envelope, Opaque, SearchSource},
    Client, API_PREFIX, RUNTIME,
};

const API_ANIME_CURRENT_SEASON: &str = formatcp!("{API_PREFIX}/anime/current-season");
const API_ANIME_NEWS: &str = formatcp!("{API_PREFIX}/anime/news");
const API_ANIME_RECENTLY_AIRED: &str = formatcp!("{API_PREFIX}/anime/recently-aired");
const API_ANIME_SEARCH: &str = formatcp!("{API_PREFIX}/anime/search");
const API_ANIME_DETAILS: &str = formatcp!("{API_PREFIX}/anime/details");

pub struct AnimeApi {
    client: Client,
}

impl AnimeApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Anime airing in the current broadcast season
    pub fn current_season(&self) -> AnimeCurrentSeason {
        AnimeCurrentSeason {
            client: self.client.clone(),
        }
    }

    /// Latest news headlines
    pub fn news(&self) -> AnimeNews {
        AnimeNews {
            client: self.client.clone(),
        }
    }

    /// Recently aired episodes
    pub fn recently_aired(&self) -> AnimeRecentlyAired {
        AnimeRecentlyAired {
            client: self.client.clone(),
        }
    }

    /// Free text search. Searches livechart unless another source is set
    pub fn search(&self, query: &str) -> AnimeSearch {
        AnimeSearch {
            client: self.client.clone(),
            q: query.to_owned(),
            source: SearchSource::default().as_ref().to_owned(),
        }
    }

    /// A single anime's detail record. The id is sent as one path segment, so `.` and `..`
    /// are rejected with [`ApiError::PathSegment`]
    pub fn details(&self, anime_id: &str) -> AnimeDetails {
        AnimeDetails {
            client: self.client.clone(),
            anime_id: anime_id.to_owned(),
        }
    }
}

pub struct AnimeCurrentSeason {
    client: Client,
}

impl AnimeCurrentSeason {
    pub async fn send(self) -> Result<Envelope<CurrentSeason>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANIME_CURRENT_SEASON)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<CurrentSeason>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct AnimeNews {
    client: Client,
}

impl AnimeNews {
    pub async fn send(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANIME_NEWS)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct AnimeRecentlyAired {
    client: Client,
}

impl AnimeRecentlyAired {
    pub async fn send(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        let request = self.client.request();
        let url = request.url(API_ANIME_RECENTLY_AIRED)?;

        request.get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<Vec<Opaque>>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

/// Search anime by free text
#[derive(Serialize)]
pub struct AnimeSearch {
    #[serde(skip)]
    client: Client,

    /// The search text, sent as-is.
    q: String,
    /// `livechart`, `anilist`, or anything else to search both.
    source: String,
}

impl AnimeSearch {
    /// Search source. See [`SearchSource`] for the values the backend knows
    pub fn source(mut self, source: impl AsRef<str>) -> Self {
        self.source = source.as_ref().to_owned();
        self
    }

    fn url(&self) -> Result<Url, ApiError> {
        let mut url = self.client.request().url(API_ANIME_SEARCH)?;
        let query = serde_qs::to_string(self)?;
        url.set_query(Some(&query));

        Ok(url)
    }

    pub async fn send(self) -> Result<Envelope<AnimeList>, ApiError> {
        let url = self.url()?;

        self.client.request().get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<AnimeList>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}

pub struct AnimeDetails {
    client: Client,
    anime_id: String,
}

impl AnimeDetails {
    fn url(&self) -> Result<Url, ApiError> {
        // dot segments are resolved away by url parsers, even percent-encoded
        if matches!(self.anime_id.as_str(), "." | "..") {
            return Err(ApiError::PathSegment(self.anime_id.clone()));
        }

        let mut url = self.client.request().url(API_ANIME_DETAILS)?;
        // base urls that cannot be a base are rejected when the client is built
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&self.anime_id);
        }

        Ok(url)
    }

    pub async fn send(self) -> Result<Envelope<Anime>, ApiError> {
        let url = self.url()?;

        self.client.request().get(url).await
    }

    pub fn send_blocking(self) -> Result<Envelope<Anime>, ApiError> {
        RUNTIME.block_on(self.send())
    }
}
