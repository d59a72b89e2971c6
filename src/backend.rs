//! The part of the api the home view consumes.
//!
//! [`Client`] implements it over http. Tests plug in their own implementation.

use std::future::Future;

use crate::{
    errors::ApiError,
    objects::{AnimeList, CurrentSeason, Envelope},
    Client,
};

pub trait AnimeBackend: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Anime airing this season.
    fn current_season(
        &self,
    ) -> impl Future<Output = Result<Envelope<CurrentSeason>, Self::Error>> + Send;

    /// Search with the backend's default source.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Envelope<AnimeList>, Self::Error>> + Send;
}

impl AnimeBackend for Client {
    type Error = ApiError;

    fn current_season(
        &self,
    ) -> impl Future<Output = Result<Envelope<CurrentSeason>, Self::Error>> + Send {
        self.anime().current_season().send()
    }

    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Envelope<AnimeList>, Self::Error>> + Send {
        self.anime().search(query).send()
    }
}
