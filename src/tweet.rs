//! The tweet wrapper: null-safe accessors over one raw API record.
//!
//! A [`Tweet`] keeps the decoded JSON object and its serialized text, and
//! derives the commonly used fields on demand. Text and ids are computed on
//! first access and cached for the lifetime of the wrapper.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::constants::{
    output_time_format, DEFAULT_OUTPUT_FORMAT, PARSE_TIME_FORMAT,
    PARSE_TIME_FORMAT_WITHOUT_WEEKDAY,
};
use crate::error::{FieldError, InputError};
use crate::extraction::{Extractor, FieldPath};
use crate::identifier::Identifier;
use crate::summary::TweetSummary;
use crate::text::{self, TextProcessor};
use crate::view::{self, EntitiesView, ExtendedView, UserView};

/// Lazily derived fields. `OnceLock` distinguishes "not computed" from a
/// computed empty value, and computes each slot at most once across threads.
#[derive(Debug, Clone, Default)]
struct DerivedFields {
    text: OnceLock<String>,
    normalized_text: OnceLock<String>,
    record_id: OnceLock<Identifier>,
    author_id: OnceLock<Identifier>,
}

/// One tweet as delivered by the Twitter API.
///
/// # Example
/// ```
/// use tweeta::Tweet;
///
/// let tweet = Tweet::from_json(r#"{"id_str": "1", "full_text": "RT @alice: hi #rust"}"#)?;
/// assert!(tweet.is_retweet());
/// assert_eq!(tweet.mentions(), vec!["@alice"]);
/// assert_eq!(tweet.hashtags(), vec!["#rust"]);
/// # Ok::<(), tweeta::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tweet {
    record: Map<String, Value>,
    json: String,
    processor: TextProcessor,
    cache: DerivedFields,
}

impl Tweet {
    /// Wrap serialized JSON text. The text is kept verbatim as [`Tweet::serialized`].
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        if json.trim().is_empty() {
            tracing::debug!("Rejecting empty tweet input");
            return Err(InputError::Empty);
        }

        let value: Value = serde_json::from_str(json).map_err(|e| {
            tracing::debug!("Rejecting malformed tweet JSON: {}", e);
            InputError::Malformed(e)
        })?;

        match value {
            Value::Object(record) if record.is_empty() => Err(InputError::Empty),
            Value::Object(record) => Ok(Self::build(record, json.to_string())),
            other => Err(InputError::WrongType {
                actual: json_kind(&other),
            }),
        }
    }

    /// Wrap an already-decoded JSON object.
    pub fn from_map(record: Map<String, Value>) -> Result<Self, InputError> {
        if record.is_empty() {
            tracing::debug!("Rejecting empty tweet record");
            return Err(InputError::Empty);
        }
        let json = serde_json::to_string(&record)?;
        Ok(Self::build(record, json))
    }

    /// Wrap either a JSON object or a JSON string holding serialized text.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value {
            Value::Object(record) => Self::from_map(record),
            Value::String(json) => Self::from_json(&json),
            Value::Null => Err(InputError::Empty),
            other => Err(InputError::WrongType {
                actual: json_kind(&other),
            }),
        }
    }

    fn build(record: Map<String, Value>, json: String) -> Self {
        Self {
            record,
            json,
            processor: TextProcessor::default(),
            cache: DerivedFields::default(),
        }
    }

    /// Use `processor` for normalization and language detection.
    pub fn with_processor(mut self, processor: TextProcessor) -> Self {
        self.processor = processor;
        self.cache.normalized_text = OnceLock::new();
        self
    }

    /// Get an arbitrary top-level field.
    pub fn field(&self, name: &str) -> Result<&Value, FieldError> {
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        self.record.get(name).ok_or_else(|| FieldError::Missing {
            field: name.to_string(),
        })
    }

    /// The decoded record
    pub fn raw_record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// The serialized record
    pub fn serialized(&self) -> &str {
        &self.json
    }

    /// Canonical text of the tweet.
    ///
    /// `full_text` (extended mode) wins over `extended_tweet.full_text`
    /// (compatibility mode on the streaming API), which wins over the
    /// possibly truncated `text`. Empty when none is present.
    pub fn text(&self) -> &str {
        self.cache.text.get_or_init(|| {
            if let Some(full_text) = self.str_field("full_text") {
                return full_text.to_string();
            }
            if let Some(full_text) = self.extended().and_then(|extended| extended.full_text) {
                return full_text;
            }
            self.str_field("text").unwrap_or_default().to_string()
        })
    }

    /// [`Tweet::text`] with encoding artifacts repaired and line breaks removed
    pub fn normalized_text(&self) -> &str {
        self.cache
            .normalized_text
            .get_or_init(|| self.processor.normalizer.normalize(self.text()))
    }

    /// Tweet id, from `id_str` if available, otherwise `id`
    pub fn record_id(&self) -> &Identifier {
        self.cache.record_id.get_or_init(|| {
            Identifier::prefer_string(self.str_field("id_str"), self.record.get("id"))
        })
    }

    /// User id, from `user.id_str` if available, otherwise `user.id`
    pub fn author_id(&self) -> &Identifier {
        self.cache
            .author_id
            .get_or_init(|| self.user().map(|user| user.identifier()).unwrap_or_default())
    }

    /// `created_at` reformatted with a named preset or a literal strftime pattern.
    ///
    /// Presets are listed in [`OUTPUT_TIME_FORMATS`](crate::constants::OUTPUT_TIME_FORMATS);
    /// any other string, e.g. `"%Y/%m/%d %H:%M"`, is used as the pattern itself.
    /// A `%` that does not start a known directive is printed as is, so
    /// `"%Q"` gives `"%Q"`. The weekday name in the raw value is not checked
    /// against the date.
    pub fn created_at(&self, output_format: &str) -> Result<String, FieldError> {
        let raw = self.field("created_at")?;
        let raw = raw.as_str().ok_or_else(|| FieldError::InvalidValue {
            field: "created_at".to_string(),
            reason: format!("expected a string, got {}", raw),
        })?;

        let timestamp = parse_created_at(raw)
            .map_err(|reason| FieldError::InvalidValue {
                field: "created_at".to_string(),
                reason: format!("'{}': {}", raw, reason),
            })?
            .and_utc();

        let pattern = output_time_format(output_format)
            .map(str::to_string)
            .unwrap_or_else(|| escape_unknown_directives(output_format));

        let mut formatted = String::new();
        write!(formatted, "{}", timestamp.format(&pattern)).map_err(|_| {
            FieldError::InvalidFormat {
                format: output_format.to_string(),
            }
        })?;
        Ok(formatted)
    }

    /// [`Tweet::created_at`] with the `YMD` preset
    pub fn created_at_default(&self) -> Result<String, FieldError> {
        self.created_at(DEFAULT_OUTPUT_FORMAT)
    }

    /// Whether the tweet is a retweet.
    ///
    /// True when the text starts with `RT @` (any case) or `retweeted_status`
    /// is set. Only `RT @` counts: "RT IF U AGREE" is not a retweet.
    pub fn is_retweet(&self) -> bool {
        let text = self.text();
        let rt_prefix = text
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rt @"));
        rt_prefix || self.has_retweeted_status()
    }

    pub fn has_retweeted_status(&self) -> bool {
        self.non_null("retweeted_status").is_some()
    }

    /// Whether the tweet quotes another tweet. Same check as [`Tweet::has_quoted_status`].
    pub fn is_quote(&self) -> bool {
        self.non_null("quoted_status").is_some()
    }

    /// Whether `quoted_status` is set. A quote is not a retweet.
    pub fn has_quoted_status(&self) -> bool {
        self.non_null("quoted_status").is_some()
    }

    /// Mentions from `entities.user_mentions`, or from the text when there are none
    pub fn mentions(&self) -> Vec<String> {
        let mentions = self.entities().map(|e| e.mentions()).unwrap_or_default();
        if !mentions.is_empty() {
            return mentions;
        }
        tracing::debug!("No mention entities on tweet {}, scanning text", self.record_id());
        text::extract_mentions(self.text())
    }

    /// Hashtags from `entities.hashtags`, or from the text when there are none
    pub fn hashtags(&self) -> Vec<String> {
        let hashtags = self.entities().map(|e| e.hashtags()).unwrap_or_default();
        if !hashtags.is_empty() {
            return hashtags;
        }
        tracing::debug!("No hashtag entities on tweet {}, scanning text", self.record_id());
        text::extract_hashtags(self.text())
    }

    /// Whether the tweet is in English.
    ///
    /// Uses the `lang` annotation when the key exists. The language detector
    /// only runs when `lang` is missing altogether; a `lang` of `"und"` or
    /// `null` is taken as not English.
    pub fn is_en(&self) -> bool {
        match self.record.get("lang") {
            Some(lang) => lang.as_str().is_some_and(|lang| lang.starts_with("en")),
            None => {
                tracing::debug!("No lang on tweet {}, detecting", self.record_id());
                self.processor.detector.detect(self.text()).as_deref() == Some("en")
            }
        }
    }

    /// Whether the author's profile language is English
    pub fn is_user_en(&self) -> bool {
        self.user()
            .and_then(|user| user.lang)
            .is_some_and(|lang| lang.starts_with("en"))
    }

    pub fn is_geotagged(&self) -> bool {
        ["place", "geo", "coordinates"]
            .iter()
            .any(|key| self.non_null(key).is_some())
    }

    /// Whether this is a deletion notice. Deletion notices carry no other tweet fields.
    pub fn is_deleted(&self) -> bool {
        self.record.contains_key("delete")
    }

    pub fn user_location(&self) -> String {
        self.user().and_then(|user| user.location).unwrap_or_default()
    }

    pub fn user_name(&self) -> String {
        self.user().and_then(|user| user.name).unwrap_or_default()
    }

    pub fn user_screen_name(&self) -> String {
        self.user().and_then(|user| user.screen_name).unwrap_or_default()
    }

    pub fn user_description(&self) -> String {
        self.user().and_then(|user| user.description).unwrap_or_default()
    }

    /// Whether the tweet links somewhere (`entities.urls` first, then the text)
    pub fn has_url(&self) -> bool {
        if self.entities().is_some_and(|e| e.has_urls()) {
            return true;
        }
        text::has_url(self.text())
    }

    /// Whether the record carries all root elements of a tweet.
    ///
    /// Checks key presence only: (`text` or `full_text`), `id`, `created_at`, `user`.
    pub fn is_valid(&self) -> bool {
        (self.record.contains_key("text") || self.record.contains_key("full_text"))
            && self.record.contains_key("id")
            && self.record.contains_key("created_at")
            && self.record.contains_key("user")
    }

    /// Snapshot of every derived field
    pub fn summary(&self, date_format: &str) -> TweetSummary {
        TweetSummary::from_tweet(self, date_format)
    }

    fn non_null(&self, key: &str) -> Option<&Value> {
        self.record.get(key).filter(|value| !value.is_null())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.record.get(key).and_then(Value::as_str)
    }

    fn user(&self) -> Option<UserView> {
        view::read(self.record.get("user"))
    }

    fn entities(&self) -> Option<EntitiesView> {
        view::read(self.record.get("entities"))
    }

    fn extended(&self) -> Option<ExtendedView> {
        view::read(self.record.get("extended_tweet"))
    }
}

/// Parse a raw `created_at`; the leading weekday must be a valid name but may disagree with the date.
fn parse_created_at(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    let (weekday, rest) = raw
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected {}", PARSE_TIME_FORMAT))?;
    weekday
        .parse::<Weekday>()
        .map_err(|_| format!("unknown weekday '{}'", weekday))?;
    NaiveDateTime::parse_from_str(rest.trim_start(), PARSE_TIME_FORMAT_WITHOUT_WEEKDAY)
        .map_err(|e| e.to_string())
}

/// Double every `%` that chrono would not read as a directive, including a trailing one.
fn escape_unknown_directives(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find('%') {
        escaped.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // Directives are at most `%` plus four chars (`%.3f`, `%::z`)
        let directive_end = tail
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .skip(1)
            .take(4)
            .find(|&end| {
                StrftimeItems::new(&tail[..end]).all(|item| !matches!(item, Item::Error))
            });

        match directive_end {
            Some(end) => {
                escaped.push_str(&tail[..end]);
                rest = &tail[end..];
            }
            None => {
                escaped.push_str("%%");
                rest = &tail[1..];
            }
        }
    }

    escaped.push_str(rest);
    escaped
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Tweet: {}>", self.json)
    }
}

impl Serialize for Tweet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

impl Extractor for Tweet {
    fn lookup(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve_in(&self.record)
    }
}

impl FromStr for Tweet {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl TryFrom<&str> for Tweet {
    type Error = InputError;

    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

impl TryFrom<Value> for Tweet {
    type Error = InputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<Map<String, Value>> for Tweet {
    type Error = InputError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_map(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tweet(value: Value) -> Tweet {
        Tweet::from_value(value).unwrap()
    }

    #[test]
    fn test_construct_from_json_keeps_text() {
        let json = r#"{"id": 1,   "text": "hello"}"#;
        let t = Tweet::from_json(json).unwrap();

        assert_eq!(t.serialized(), json);
        assert_eq!(t.raw_record().get("text"), Some(&json!("hello")));
    }

    #[test]
    fn test_construct_from_map_serializes() {
        let t = tweet(json!({"id": 1, "text": "hello"}));
        assert_eq!(t.serialized(), r#"{"id":1,"text":"hello"}"#);
    }

    #[test]
    fn test_construct_rejects_empty() {
        assert!(matches!(Tweet::from_json(""), Err(InputError::Empty)));
        assert!(matches!(Tweet::from_json("  \n"), Err(InputError::Empty)));
        assert!(matches!(Tweet::from_json("{}"), Err(InputError::Empty)));
        assert!(matches!(Tweet::from_value(json!({})), Err(InputError::Empty)));
        assert!(matches!(Tweet::from_value(Value::Null), Err(InputError::Empty)));
    }

    #[test]
    fn test_construct_rejects_wrong_type() {
        assert!(matches!(
            Tweet::from_json("[1, 2]"),
            Err(InputError::WrongType { actual: "array" })
        ));
        assert!(matches!(
            Tweet::from_value(json!(42)),
            Err(InputError::WrongType { actual: "number" })
        ));
        assert!(matches!(Tweet::from_json("{oops"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_construct_from_json_string_value() {
        let t = tweet(Value::String(r#"{"text": "nested"}"#.to_string()));
        assert_eq!(t.text(), "nested");
    }

    #[test]
    fn test_field() {
        let t = tweet(json!({"id": 7, "lang": null}));

        assert_eq!(t.field("id"), Ok(&json!(7)));
        assert_eq!(t.field("lang"), Ok(&Value::Null));
        assert_eq!(t.field(""), Err(FieldError::EmptyName));
        assert_eq!(
            t.field("nope"),
            Err(FieldError::Missing {
                field: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_text_precedence() {
        let t = tweet(json!({"full_text": "full", "text": "short", "extended_tweet": {"full_text": "ext"}}));
        assert_eq!(t.text(), "full");

        let t = tweet(json!({"text": "short…", "extended_tweet": {"full_text": "the long one"}}));
        assert_eq!(t.text(), "the long one");

        let t = tweet(json!({"text": "short", "extended_tweet": null}));
        assert_eq!(t.text(), "short");

        let t = tweet(json!({"text": "short", "extended_tweet": {"entities": {}}}));
        assert_eq!(t.text(), "short");

        let t = tweet(json!({"id": 1}));
        assert_eq!(t.text(), "");
    }

    #[test]
    fn test_text_is_cached() {
        let t = tweet(json!({"id": 1}));
        let first = t.text() as *const str;
        let second = t.text() as *const str;
        assert_eq!(first, second);
        assert_eq!(t.cache.text.get().map(String::as_str), Some(""));
    }

    #[test]
    fn test_normalized_text() {
        let t = tweet(json!({"text": "fish &amp; chips\nnow"}));
        assert_eq!(t.normalized_text(), "fish & chips now");
        assert_eq!(t.text(), "fish &amp; chips\nnow");
    }

    #[test]
    fn test_with_processor_resets_normalized_text() {
        use crate::config::NormalizerConfig;
        use crate::text::{LanguageDetector, TextNormalizer};

        let t = tweet(json!({"text": "a &amp; b"}));
        assert_eq!(t.normalized_text(), "a & b");

        let processor = TextProcessor::new(
            TextNormalizer::new(NormalizerConfig {
                unicode_normalize: true,
                unescape_html: false,
            }),
            LanguageDetector::default(),
        );
        let t = t.with_processor(processor);
        assert_eq!(t.normalized_text(), "a &amp; b");
    }

    #[test]
    fn test_record_id() {
        let t = tweet(json!({"id": 123, "id_str": "123"}));
        assert_eq!(t.record_id(), &Identifier::Text("123".to_string()));

        let t = tweet(json!({"id": 123}));
        assert_eq!(t.record_id(), &Identifier::Numeric(123.into()));

        let t = tweet(json!({"text": "no id"}));
        assert!(t.record_id().is_missing());
        assert_eq!(t.record_id().to_string(), "");
    }

    #[test]
    fn test_author_id() {
        let t = tweet(json!({"user": {"id": 9, "id_str": "9"}}));
        assert_eq!(t.author_id(), &Identifier::Text("9".to_string()));

        let t = tweet(json!({"user": {"id": 9}}));
        assert_eq!(t.author_id().to_string(), "9");

        let t = tweet(json!({"user": null}));
        assert!(t.author_id().is_missing());

        let t = tweet(json!({"id": 1}));
        assert!(t.author_id().is_missing());
    }

    #[test]
    fn test_created_at() {
        let t = tweet(json!({"created_at": "Wed Oct 10 20:19:24 +0000 2018"}));

        assert_eq!(t.created_at_default().unwrap(), "20181010");
        assert_eq!(t.created_at("Y").unwrap(), "2018");
        assert_eq!(t.created_at("Y-M").unwrap(), "2018-10");
        assert_eq!(t.created_at("Y-M-D").unwrap(), "2018-10-10");
        assert_eq!(t.created_at("%Y/%m/%d %H:%M").unwrap(), "2018/10/10 20:19");
        assert_eq!(t.created_at("week %V").unwrap(), "week 41");
    }

    #[test]
    fn test_created_at_errors() {
        let t = tweet(json!({"id": 1}));
        assert_eq!(
            t.created_at("YMD"),
            Err(FieldError::Missing {
                field: "created_at".to_string()
            })
        );

        let t = tweet(json!({"created_at": "2018-10-10"}));
        assert!(matches!(t.created_at("YMD"), Err(FieldError::InvalidValue { .. })));

        let t = tweet(json!({"created_at": "Someday Oct 10 20:19:24 +0000 2018"}));
        assert!(matches!(t.created_at("YMD"), Err(FieldError::InvalidValue { .. })));
    }

    #[test]
    fn test_created_at_unknown_directives_are_literal() {
        let t = tweet(json!({"created_at": "Wed Oct 10 20:19:24 +0000 2018"}));

        assert_eq!(t.created_at("%Q").unwrap(), "%Q");
        assert_eq!(t.created_at("%Y 100%").unwrap(), "2018 100%");
        assert_eq!(t.created_at("%Y%Q%m").unwrap(), "2018%Q10");
        assert_eq!(t.created_at("100%%").unwrap(), "100%");
        assert_eq!(t.created_at("%-d/%-m").unwrap(), "10/10");
    }

    #[test]
    fn test_created_at_ignores_weekday_mismatch() {
        let t = tweet(json!({"created_at": "Mon Oct 10 20:19:24 +0000 2018"}));
        assert_eq!(t.created_at_default().unwrap(), "20181010");
    }

    #[test]
    fn test_is_retweet() {
        assert!(tweet(json!({"text": "RT @alice: hi"})).is_retweet());
        assert!(tweet(json!({"text": "rt @alice: hi"})).is_retweet());
        assert!(!tweet(json!({"text": "RT IF U AGREE"})).is_retweet());
        assert!(tweet(json!({"text": "hello", "retweeted_status": {"id": 1}})).is_retweet());
        assert!(!tweet(json!({"text": "hello", "retweeted_status": null})).is_retweet());
        assert!(!tweet(json!({"text": "RT"})).is_retweet());
    }

    #[test]
    fn test_quote_status() {
        let t = tweet(json!({"text": "look", "quoted_status": {"id": 2}}));
        assert!(t.is_quote());
        assert!(t.has_quoted_status());
        assert!(!t.has_retweeted_status());

        let t = tweet(json!({"text": "look", "quoted_status": null}));
        assert!(!t.is_quote());
        assert!(!t.has_quoted_status());
    }

    #[test]
    fn test_mentions_prefer_entities() {
        let t = tweet(json!({
            "text": "hi @carol",
            "entities": {"user_mentions": [{"screen_name": "bob"}]}
        }));
        assert_eq!(t.mentions(), vec!["@bob"]);
    }

    #[test]
    fn test_mentions_fall_back_to_text() {
        let t = tweet(json!({"text": "hi @carol", "entities": {"user_mentions": []}}));
        assert_eq!(t.mentions(), vec!["@carol"]);

        let t = tweet(json!({"text": "hi @carol"}));
        assert_eq!(t.mentions(), vec!["@carol"]);
    }

    #[test]
    fn test_hashtags() {
        let t = tweet(json!({
            "text": "#one #two",
            "entities": {"hashtags": [{"text": "Three"}, {"text": "four"}]}
        }));
        assert_eq!(t.hashtags(), vec!["#Three", "#four"]);

        let t = tweet(json!({"text": "#one #two", "entities": {"hashtags": []}}));
        assert_eq!(t.hashtags(), vec!["#one", "#two"]);
    }

    #[test]
    fn test_is_en() {
        assert!(tweet(json!({"text": "x", "lang": "en"})).is_en());
        assert!(tweet(json!({"text": "x", "lang": "en-gb"})).is_en());
        assert!(!tweet(json!({"text": "The weather is lovely today and we are going out", "lang": "und"})).is_en());
        assert!(!tweet(json!({"text": "x", "lang": null})).is_en());
        assert!(tweet(json!({
            "text": "The weather is lovely today and we are going for a long walk in the park"
        }))
        .is_en());
        assert!(!tweet(json!({
            "text": "Hoy hace un tiempo estupendo y vamos a dar un paseo largo por el parque"
        }))
        .is_en());
    }

    #[test]
    fn test_is_user_en() {
        assert!(tweet(json!({"user": {"lang": "en"}})).is_user_en());
        assert!(!tweet(json!({"user": {"lang": "fr"}})).is_user_en());
        assert!(!tweet(json!({"user": {"lang": null}})).is_user_en());
        assert!(!tweet(json!({"user": null})).is_user_en());
        assert!(!tweet(json!({"text": "The weather is lovely today"})).is_user_en());
    }

    #[test]
    fn test_is_geotagged() {
        assert!(tweet(json!({"place": {"id": "x"}})).is_geotagged());
        assert!(tweet(json!({"geo": null, "coordinates": {"type": "Point"}})).is_geotagged());
        assert!(!tweet(json!({"place": null, "geo": null, "coordinates": null})).is_geotagged());
        assert!(!tweet(json!({"text": "somewhere"})).is_geotagged());
    }

    #[test]
    fn test_is_deleted() {
        assert!(tweet(json!({"delete": null})).is_deleted());
        assert!(tweet(json!({"delete": {"status": {"id": 1}}})).is_deleted());
        assert!(!tweet(json!({"text": "still here"})).is_deleted());
    }

    #[test]
    fn test_user_fields() {
        let t = tweet(json!({"user": {
            "name": "Alice",
            "screen_name": "alice",
            "location": null,
            "description": "Rustacean"
        }}));
        assert_eq!(t.user_name(), "Alice");
        assert_eq!(t.user_screen_name(), "alice");
        assert_eq!(t.user_location(), "");
        assert_eq!(t.user_description(), "Rustacean");

        let t = tweet(json!({"user": null}));
        assert_eq!(t.user_name(), "");
        assert_eq!(t.user_screen_name(), "");
    }

    #[test]
    fn test_has_url() {
        let t = tweet(json!({"text": "no link", "entities": {"urls": [{"url": "https://t.co/x"}]}}));
        assert!(t.has_url());

        let t = tweet(json!({"text": "see https://t.co/x", "entities": {"urls": []}}));
        assert!(t.has_url());

        let t = tweet(json!({"text": "no link", "entities": {"urls": null}}));
        assert!(!t.has_url());
    }

    #[test]
    fn test_is_valid() {
        let t = tweet(json!({"text": "hi", "id": 1, "created_at": "x", "user": null}));
        assert!(t.is_valid());

        let t = tweet(json!({"full_text": "hi", "id": 1, "created_at": "x", "user": {}}));
        assert!(t.is_valid());

        let t = tweet(json!({"text": "hi", "id": 1, "user": {}}));
        assert!(!t.is_valid());

        let t = tweet(json!({"id": 1, "created_at": "x", "user": {}}));
        assert!(!t.is_valid());
    }

    #[test]
    fn test_extractor() {
        let t = tweet(json!({"user": {"screen_name": "alice"}, "entities": {"hashtags": [{"text": "a"}]}}));

        assert_eq!(t.extract(&FieldPath::from_dotted("user.screen_name")), Some("alice".to_string()));
        assert_eq!(
            t.extract(&FieldPath::from_dotted("entities.hashtags.[0].text")),
            Some("a".to_string())
        );
        assert_eq!(t.lookup(&FieldPath::from_dotted("user.missing")), None);
        assert_eq!(t.lookup(&FieldPath::from_dotted("")), None);
    }

    #[test]
    fn test_display_and_serialize() {
        let t = Tweet::from_json(r#"{"id":1}"#).unwrap();
        assert_eq!(t.to_string(), r#"<Tweet: {"id":1}>"#);
        assert_eq!(serde_json::to_value(&t).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_shared_across_threads() {
        let t = std::sync::Arc::new(tweet(json!({"id_str": "5", "text": "RT @a: x"})));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let t = std::sync::Arc::clone(&t);
                std::thread::spawn(move || (t.text().to_string(), t.record_id().to_string()))
            })
            .collect();

        for handle in handles {
            let (text, id) = handle.join().unwrap();
            assert_eq!(text, "RT @a: x");
            assert_eq!(id, "5");
        }
    }
}
