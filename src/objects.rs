mod anilist;
mod anime;
mod envelope;
mod health;
mod titles;

pub use anilist::*;
pub use anime::*;
pub use envelope::*;
pub use health::*;
pub use titles::*;

/// Payload whose shape the backend does not pin down (news, recently aired, tracked list items)
pub type Opaque = serde_json::Value;
