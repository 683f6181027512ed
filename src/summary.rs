//! Flat snapshot of a tweet's derived fields.

use serde::{Deserialize, Serialize};

use crate::tweet::Tweet;

/// Every derived field of one tweet, ready to be written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TweetSummary {
    /// Rendered as text so 64-bit ids stay exact
    pub id: String,
    pub user_id: String,
    /// `None` when `created_at` is absent or cannot be parsed
    pub created_at: Option<String>,
    pub text: String,
    pub normalized_text: String,
    pub mentions: Vec<String>,
    pub hashtags: Vec<String>,
    pub is_retweet: bool,
    pub is_quote: bool,
    pub is_en: bool,
    pub is_user_en: bool,
    pub is_geotagged: bool,
    pub is_deleted: bool,
    pub has_url: bool,
    pub is_valid: bool,
    pub user_name: String,
    pub user_screen_name: String,
    pub user_location: String,
    pub user_description: String,
}

impl TweetSummary {
    pub fn from_tweet(tweet: &Tweet, date_format: &str) -> Self {
        let created_at = match tweet.created_at(date_format) {
            Ok(formatted) => Some(formatted),
            Err(e) => {
                tracing::debug!("No created_at for tweet {}: {}", tweet.record_id(), e);
                None
            }
        };

        Self {
            id: tweet.record_id().to_string(),
            user_id: tweet.author_id().to_string(),
            created_at,
            text: tweet.text().to_string(),
            normalized_text: tweet.normalized_text().to_string(),
            mentions: tweet.mentions(),
            hashtags: tweet.hashtags(),
            is_retweet: tweet.is_retweet(),
            is_quote: tweet.is_quote(),
            is_en: tweet.is_en(),
            is_user_en: tweet.is_user_en(),
            is_geotagged: tweet.is_geotagged(),
            is_deleted: tweet.is_deleted(),
            has_url: tweet.has_url(),
            is_valid: tweet.is_valid(),
            user_name: tweet.user_name(),
            user_screen_name: tweet.user_screen_name(),
            user_location: tweet.user_location(),
            user_description: tweet.user_description(),
        }
    }

    /// Convert summary to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert summary to pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert summary to NDJSON line (newline-delimited JSON)
    pub fn to_ndjson_line(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?;
        Ok(format!("{}\n", json))
    }
}
