//! # Tweeta: safe accessors for Twitter API records
//!
//! Tweeta wraps one raw tweet (JSON text or a decoded JSON object) and
//! exposes the fields people usually dig out of it through null-safe,
//! cached accessors instead of chains of key lookups.
//!
//! ## Features
//!
//! - **Canonical text**: `full_text`, `extended_tweet.full_text` and `text` resolved in the right order
//! - **Entities with fallback**: mentions, hashtags and URLs from `entities`, or from the text when the API left them out
//! - **Flags**: retweet, quote, geotag, deletion, language and validity checks
//! - **Path lookups**: `user.screen_name`-style access to anything else in the record
//! - **Summaries**: a flat, serializable snapshot of every derived field
//!
//! ## Example
//!
//! ```
//! use tweeta::Tweet;
//!
//! let tweet = Tweet::from_json(r#"{
//!     "id": 1050118621198921728,
//!     "id_str": "1050118621198921728",
//!     "created_at": "Wed Oct 10 20:19:24 +0000 2018",
//!     "text": "Shipping #rust with @ferris",
//!     "lang": "en",
//!     "user": {"id_str": "42", "screen_name": "crab"}
//! }"#)?;
//!
//! assert_eq!(tweet.record_id().to_string(), "1050118621198921728");
//! assert_eq!(tweet.created_at("Y-M-D")?, "2018-10-10");
//! assert_eq!(tweet.mentions(), vec!["@ferris"]);
//! assert_eq!(tweet.hashtags(), vec!["#rust"]);
//! assert!(tweet.is_en() && tweet.is_valid());
//! # Ok::<(), tweeta::Error>(())
//! ```

// Core modules
pub mod tweet;
pub mod identifier;
pub mod view;
pub mod error;
pub mod constants;

// Collaborators and configuration
pub mod text;
pub mod config;

// Lookups and output
pub mod extraction;
pub mod summary;
pub mod serialization;

// Re-export key types
pub use tweet::Tweet;
pub use identifier::Identifier;
pub use error::{Error, Result, InputError, FieldError, ConfigError};
pub use config::{TweetaConfig, NormalizerConfig, LanguageConfig};
pub use text::{TextProcessor, TextNormalizer, LanguageDetector};
pub use extraction::{FieldPath, Extractor};
pub use summary::TweetSummary;
pub use serialization::{NdjsonWriter, JsonArrayWriter, SerializationError};
