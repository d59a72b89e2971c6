use serde::Deserialize;

/// Answer of the health check. Not wrapped in an envelope.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
