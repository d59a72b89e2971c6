use serde::Deserialize;

/// The `{ success, data }` wrapper every endpoint answers with.
///
/// Mutation endpoints answer with a `message` instead of (or next to) `data`,
/// and a `success: false` answer usually carries only a `message`.
/// Checking `success` is left to the caller.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    // no `#[serde(default)]`: it would bound `T: Default`, a missing key is None anyway
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The payload, only when the backend reported success
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::TitleMatch;

    #[test]
    fn failure_without_data() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"No good match found"}"#).unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("No good match found"));
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn missing_data_without_default_payload() {
        let envelope: Envelope<TitleMatch> =
            serde_json::from_str(r#"{"success":false,"message":"No good match found"}"#).unwrap();
        assert_eq!(envelope.data, None);

        let envelope: Envelope<TitleMatch> =
            serde_json::from_str(r#"{"success":true,"data":{"match":"Bleach","score":97.0}}"#)
                .unwrap();
        assert_eq!(envelope.into_data().unwrap().title, "Bleach");
    }

    #[test]
    fn data_is_hidden_when_not_successful() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"data":[1]}"#).unwrap();
        assert_eq!(envelope.into_data(), None);
    }

    #[test]
    fn message_only_success() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"Progress updated"}"#).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message.as_deref(), Some("Progress updated"));
    }
}
