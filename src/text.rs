//! Text collaborators used by [`Tweet`](crate::Tweet).
//!
//! Stateless helpers for normalizing tweet text, pulling mentions, hashtags
//! and URLs out of raw text, and guessing the language of a text when the
//! record carries no `lang` annotation.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;
use whatlang::Lang;

use crate::config::{LanguageConfig, NormalizerConfig};

static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static LINE_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();

fn mention_regex() -> &'static Regex {
    // Screen names are 1-15 word characters; an `@` glued to a word is an email, not a mention
    MENTION_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|[^\w@])@(\w{1,15})\b").expect("Failed to compile mention regex")
    })
}

fn hashtag_regex() -> &'static Regex {
    HASHTAG_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|[^\w&#])[#＃](\w+)").expect("Failed to compile hashtag regex")
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>]+").expect("Failed to compile URL regex")
    })
}

fn line_break_regex() -> &'static Regex {
    LINE_BREAK_REGEX.get_or_init(|| {
        Regex::new(r"[\r\n\u{2028}\u{2029}]+").expect("Failed to compile line break regex")
    })
}

/// Extract `@mentions` from raw text, in order of appearance.
///
/// ```
/// assert_eq!(tweeta::text::extract_mentions("hi @carol and @dave!"), vec!["@carol", "@dave"]);
/// ```
pub fn extract_mentions(text: &str) -> Vec<String> {
    mention_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| format!("@{}", m.as_str()))
        .collect()
}

/// Extract `#hashtags` from raw text, in order of appearance.
///
/// Purely numeric tags (`#1`) are not hashtags.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    hashtag_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter(|m| !m.as_str().chars().all(|c| c.is_ascii_digit()))
        .map(|m| format!("#{}", m.as_str()))
        .collect()
}

/// Whether the text contains something that looks like a URL.
pub fn has_url(text: &str) -> bool {
    url_regex().is_match(text)
}

/// Repairs the encoding artifacts found in API text and removes line breaks.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalize text according to configuration
    ///
    /// Applies, in order: Unicode NFC composition, decoding of the HTML
    /// entities the API escapes, then replacement of line breaks by a single
    /// space. The result is trimmed.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = if self.config.unicode_normalize {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.config.unescape_html {
            result = unescape_html(&result);
        }

        line_break_regex().replace_all(&result, " ").trim().to_string()
    }
}

/// The API escapes only these entities; `&amp;` goes last so `&amp;lt;` stays `&lt;`.
fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Language guessing for texts without a `lang` annotation.
#[derive(Debug, Clone, Default)]
pub struct LanguageDetector {
    config: LanguageConfig,
}

impl LanguageDetector {
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// Detect the language of `text`.
    ///
    /// Returns the ISO 639-1 code when one exists (`"en"`), otherwise the
    /// ISO 639-3 code. `None` when the text is shorter than the configured
    /// minimum, detection fails, or confidence is below the threshold.
    pub fn detect(&self, text: &str) -> Option<String> {
        if text.chars().count() < self.config.min_text_length {
            return None;
        }

        let info = whatlang::detect(text)?;
        if info.confidence() < self.config.confidence_threshold {
            tracing::debug!(
                "Language guess {:?} below threshold ({:.2} < {:.2})",
                info.lang(),
                info.confidence(),
                self.config.confidence_threshold
            );
            return None;
        }

        Some(language_code(info.lang()).to_string())
    }
}

/// Map a whatlang language to the two-letter code Twitter uses in `lang`.
fn language_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Pol => "pl",
        Lang::Tur => "tr",
        Lang::Vie => "vi",
        Lang::Kor => "ko",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Nob => "no",
        Lang::Ukr => "uk",
        Lang::Ind => "id",
        Lang::Tha => "th",
        Lang::Heb => "he",
        Lang::Ell => "el",
        other => other.code(),
    }
}

/// The collaborators a tweet consults, bundled so they can be configured once.
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    pub normalizer: TextNormalizer,
    pub detector: LanguageDetector,
}

impl TextProcessor {
    pub fn new(normalizer: TextNormalizer, detector: LanguageDetector) -> Self {
        Self {
            normalizer,
            detector,
        }
    }

    pub fn from_config(config: &crate::TweetaConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config.normalizer.clone()),
            detector: LanguageDetector::new(config.language.clone()),
        }
    }
}
