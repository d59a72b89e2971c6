use std::ops::{Deref, DerefMut};

use serde::{de::Error, Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// One anime listing entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Anime {
    pub title: String,
    pub title_english: Option<String>,
    pub title_romaji: Option<String>,
    pub title_japanese: Option<String>,
    /// Poster image URL.
    #[serde(default)]
    pub img_url: String,
    /// Link to the listing's page.
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
    /// Episode count as the source prints it (e.g. "12 eps").
    pub episodes: Option<String>,
    pub status: Option<String>,
    pub studio: Option<String>,
    /// Where the listing was scraped from.
    pub source: Option<String>,
}

impl Anime {
    /// The english title, when it says something the main title doesn't
    pub fn alternate_title(&self) -> Option<&str> {
        self.title_english
            .as_deref()
            .filter(|english| !english.is_empty() && *english != self.title)
    }
}

/// A list of anime.
///
/// Decoding anything that isn't an array (the backend answers a search over
/// both sources with an object) yields an empty list.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct AnimeList(pub Vec<Anime>);

impl Deref for AnimeList {
    type Target = Vec<Anime>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AnimeList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<AnimeList> for Vec<Anime> {
    fn from(list: AnimeList) -> Self {
        list.0
    }
}

impl<'de> Deserialize<'de> for AnimeList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        if !value.is_array() {
            return Ok(Self::default());
        }

        let list = serde_json::from_value(value).map_err(D::Error::custom)?;

        Ok(Self(list))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CurrentSeason {
    #[serde(default)]
    pub current_season: AnimeList,
}

/// Where the backend should search
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SearchSource {
    #[default]
    Livechart,
    Anilist,
    /// Any other value searches both, answering with one list per source
    Both,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn alternate_title_only_when_different() {
        let mut anime = Anime {
            title: "Sousou no Frieren".to_owned(),
            title_english: Some("Frieren: Beyond Journey's End".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            anime.alternate_title(),
            Some("Frieren: Beyond Journey's End")
        );

        anime.title_english = Some("Sousou no Frieren".to_owned());
        assert_eq!(anime.alternate_title(), None);

        anime.title_english = None;
        assert_eq!(anime.alternate_title(), None);
    }

    #[test]
    fn anime_with_only_required_fields() {
        let anime: Anime = serde_json::from_str(
            r#"{"title":"Bleach","img_url":"https://img/1.jpg","link":"https://lc/1"}"#,
        )
        .unwrap();

        assert_eq!(anime.title, "Bleach");
        assert_eq!(anime.img_url, "https://img/1.jpg");
        assert_eq!(anime.episodes, None);
    }

    #[test]
    fn non_array_list_is_empty() {
        let list: AnimeList =
            serde_json::from_str(r#"{"livechart":[{"title":"a"}],"anilist":[]}"#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn malformed_list_item_is_an_error() {
        let list = serde_json::from_str::<AnimeList>(r#"[{"img_url":"x"}]"#);
        assert!(list.is_err());
    }

    #[test]
    fn current_season_payload() {
        let season: CurrentSeason = serde_json::from_str(
            r#"{"current_season":[{"title":"One","img_url":"","link":""},{"title":"Two","img_url":"","link":""}]}"#,
        )
        .unwrap();

        let titles: Vec<_> = season.current_season.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn search_source_strings() {
        assert_eq!(SearchSource::default().as_ref(), "livechart");
        assert_eq!(SearchSource::Anilist.to_string(), "anilist");
        assert_eq!(SearchSource::from_str("both").unwrap(), SearchSource::Both);
    }
}
