use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumString};

/// A progress update to push to the tracking service
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnimeProgress {
    /// The tracking service's media id.
    pub media_id: i64,
    /// Number of episodes watched.
    pub progress: i64,
    /// List status to move the entry to, e.g. `CURRENT`.
    pub status: Option<String>,
}

impl AnimeProgress {
    pub fn new(media_id: i64, progress: i64) -> Self {
        Self {
            media_id,
            progress,
            status: None,
        }
    }

    pub fn status(mut self, status: impl AsRef<str>) -> Self {
        self.status = Some(status.as_ref().to_owned());
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AniListUser {
    pub id: i64,
    pub name: String,
    pub avatar: Option<Avatar>,
    pub statistics: Option<UserStatistics>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Avatar {
    pub large: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserStatistics {
    pub anime: AnimeStatistics,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeStatistics {
    pub count: i64,
    pub mean_score: f64,
    pub minutes_watched: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthUrl {
    pub auth_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenExchange {
    pub user: AniListUser,
}

/// Statuses the tracked list can be filtered by
#[derive(Copy, Clone, Debug, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_without_status_omits_it() {
        let body = serde_json::to_string(&AnimeProgress::new(101, 5)).unwrap();
        assert_eq!(body, r#"{"media_id":101,"progress":5}"#);
    }

    #[test]
    fn progress_with_status() {
        let progress = AnimeProgress::new(7, 12).status(MediaListStatus::Completed);
        let body = serde_json::to_string(&progress).unwrap();
        assert_eq!(body, r#"{"media_id":7,"progress":12,"status":"COMPLETED"}"#);
    }

    #[test]
    fn user_with_statistics() {
        let user: AniListUser = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "frieren",
                "avatar": {"large": "https://s4.anilist.co/a.png"},
                "statistics": {"anime": {"count": 120, "meanScore": 78.5, "minutesWatched": 43200}}
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.avatar.unwrap().large, "https://s4.anilist.co/a.png");
        let stats = user.statistics.unwrap().anime;
        assert_eq!(stats.count, 120);
        assert_eq!(stats.mean_score, 78.5);
        assert_eq!(stats.minutes_watched, 43200);
    }

    #[test]
    fn user_without_optional_parts() {
        let user: AniListUser = serde_json::from_str(r#"{"id":1,"name":"x"}"#).unwrap();
        assert_eq!(user.avatar, None);
        assert_eq!(user.statistics, None);
    }

    #[test]
    fn list_status_strings() {
        assert_eq!(MediaListStatus::Current.as_ref(), "CURRENT");
        assert_eq!(MediaListStatus::Repeating.to_string(), "REPEATING");
        assert_eq!(
            "PAUSED".parse::<MediaListStatus>().unwrap(),
            MediaListStatus::Paused
        );
    }
}
