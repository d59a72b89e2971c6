use serde::{Deserialize, Serialize};

/// Best candidate for a fuzzy title match
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TitleMatch {
    /// The winning candidate, verbatim.
    #[serde(rename = "match")]
    pub title: String,
    pub score: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizedTitle {
    pub normalized: String,
}

#[derive(Serialize)]
pub(crate) struct MatchRequest<'a> {
    pub query: &'a str,
    pub candidates: &'a [String],
}

#[derive(Serialize)]
pub(crate) struct NormalizeRequest<'a> {
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_field_is_renamed() {
        let found: TitleMatch =
            serde_json::from_str(r#"{"match":"Shingeki no Kyojin","score":92.5}"#).unwrap();
        assert_eq!(found.title, "Shingeki no Kyojin");
        assert_eq!(found.score, 92.5);
    }

    #[test]
    fn match_request_body() {
        let candidates = vec!["Bleach".to_owned(), "Naruto".to_owned()];
        let body = serde_json::to_string(&MatchRequest {
            query: "bleach",
            candidates: &candidates,
        })
        .unwrap();
        assert_eq!(body, r#"{"query":"bleach","candidates":["Bleach","Naruto"]}"#);
    }
}
