//! Typed, optional-field views over the nested parts of a tweet.
//!
//! Every field is optional and tolerant: a value of an unexpected JSON type
//! reads as absent instead of failing the whole view.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::identifier::Identifier;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Read a view from an optional value; `null` and non-objects give `None`.
pub(crate) fn read<T: DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    match value {
        Some(value @ Value::Object(_)) => T::deserialize(value).ok(),
        _ => None,
    }
}

/// The `user` sub-record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserView {
    #[serde(default, deserialize_with = "lenient")]
    pub id_str: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub lang: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub screen_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl UserView {
    pub fn identifier(&self) -> Identifier {
        Identifier::prefer_string(self.id_str.as_deref(), self.id.as_ref())
    }
}

/// The `entities` sub-record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntitiesView {
    #[serde(default, deserialize_with = "lenient")]
    pub user_mentions: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub hashtags: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub urls: Option<Vec<Value>>,
}

impl EntitiesView {
    /// `@screen_name` for each mention entry, in list order
    pub fn mentions(&self) -> Vec<String> {
        prefixed(self.user_mentions.as_deref(), "screen_name", '@')
    }

    /// `#text` for each hashtag entry, in list order
    pub fn hashtags(&self) -> Vec<String> {
        prefixed(self.hashtags.as_deref(), "text", '#')
    }

    pub fn has_urls(&self) -> bool {
        self.urls.as_ref().is_some_and(|urls| !urls.is_empty())
    }
}

fn prefixed(entries: Option<&[Value]>, key: &str, prefix: char) -> Vec<String> {
    entries
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| entry.get(key).and_then(Value::as_str))
        .map(|name| format!("{}{}", prefix, name))
        .collect()
}

/// The `extended_tweet` sub-record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtendedView {
    #[serde(default, deserialize_with = "lenient")]
    pub full_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_view_tolerates_wrong_types() {
        let value = json!({"id_str": 5, "id": 42, "location": null, "name": "Alice"});
        let user: UserView = read(Some(&value)).unwrap();

        assert_eq!(user.id_str, None);
        assert_eq!(user.location, None);
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.identifier(), Identifier::Numeric(42.into()));
    }

    #[test]
    fn test_read_non_object() {
        assert!(read::<UserView>(Some(&Value::Null)).is_none());
        assert!(read::<UserView>(Some(&json!("alice"))).is_none());
        assert!(read::<UserView>(None).is_none());
    }

    #[test]
    fn test_entities_prefixes() {
        let value = json!({
            "user_mentions": [{"screen_name": "bob"}, {"id": 1}, {"screen_name": "eve"}],
            "hashtags": [{"text": "rust"}],
            "urls": []
        });
        let entities: EntitiesView = read(Some(&value)).unwrap();

        assert_eq!(entities.mentions(), vec!["@bob", "@eve"]);
        assert_eq!(entities.hashtags(), vec!["#rust"]);
        assert!(!entities.has_urls());
    }

    #[test]
    fn test_entities_null_lists() {
        let value = json!({"user_mentions": null, "urls": null});
        let entities: EntitiesView = read(Some(&value)).unwrap();

        assert!(entities.mentions().is_empty());
        assert!(entities.hashtags().is_empty());
        assert!(!entities.has_urls());
    }
}
