pub trait IsJson {
    fn is_json(&self) -> bool;
}

impl IsJson for str {
    fn is_json(&self) -> bool {
        serde_json::from_str::<serde::de::IgnoredAny>(self).is_ok()
    }
}

impl IsJson for String {
    fn is_json(&self) -> bool {
        self.as_str().is_json()
    }
}
