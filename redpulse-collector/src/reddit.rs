//! Minimal Reddit API client for the collector
//!
//! Covers exactly what the pipeline needs: OAuth2 password-grant login,
//! an identity check, and the hot listing for one subreddit. Pagination
//! and rate limiting stay on Reddit's side of the fence.

use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use serde::Deserialize;

use redpulse_core::config::RedditConfig;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_BASE: &str = "https://oauth.reddit.com";

/// Reddit client errors
#[derive(Debug, thiserror::Error)]
pub enum RedditError {
    #[error("reddit http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token was accepted but the identity endpoint returned no username.
    #[error("could not retrieve reddit user info; check credentials")]
    AnonymousSession,
}

/// Authenticated Reddit API session.
pub struct RedditClient {
    http: reqwest::Client,
    token: String,
    user_agent: String,
}

impl RedditClient {
    /// Log in with the OAuth2 password grant and keep the bearer token.
    pub async fn login(config: &RedditConfig) -> Result<Self, RedditError> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let http = reqwest::Client::builder().build()?;

        let response = http
            .post(TOKEN_URL)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .header(USER_AGENT, &config.user_agent)
            .form(&[
                ("grant_type", "password"),
                ("username", config.username.as_str()),
                ("password", config.password.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<TokenResponse>()
            .await?;

        Ok(Self {
            http,
            token: response.access_token,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch the logged-in username.
    ///
    /// A session that authenticates but reports no username is treated as
    /// a credential failure.
    pub async fn me(&self) -> Result<String, RedditError> {
        #[derive(Deserialize)]
        struct Identity {
            name: Option<String>,
        }

        let identity = self
            .http
            .get(format!("{OAUTH_BASE}/api/v1/me"))
            .bearer_auth(&self.token)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json::<Identity>()
            .await?;

        identity
            .name
            .filter(|name| !name.is_empty())
            .ok_or(RedditError::AnonymousSession)
    }

    /// Fetch up to `limit` hot posts from a subreddit.
    pub async fn hot(&self, subreddit: &str, limit: u32) -> Result<Vec<HotPost>, RedditError> {
        let listing = self
            .http
            .get(format!("{OAUTH_BASE}/r/{subreddit}/hot"))
            .query(&[("limit", limit)])
            .bearer_auth(&self.token)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .json::<Listing>()
            .await?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect())
    }
}

/// One post out of a hot listing.
#[derive(Debug, Clone, Deserialize)]
pub struct HotPost {
    pub title: String,
    /// Post origination time as epoch seconds (Reddit reports a float).
    pub created_utc: f64,
}

impl HotPost {
    /// Origination time as a UTC timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        epoch_to_datetime(self.created_utc)
    }
}

// Reddit's listing envelope: {"data": {"children": [{"data": {...}}]}}
#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Deserialize)]
struct ListingChild {
    data: HotPost,
}

fn epoch_to_datetime(secs: f64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs as i64, 0).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_envelope() {
        let body = r#"
        {
            "kind": "Listing",
            "data": {
                "after": "t3_abc",
                "children": [
                    {"kind": "t3", "data": {"title": "First post", "created_utc": 1700000000.0, "ups": 12}},
                    {"kind": "t3", "data": {"title": "Second post", "created_utc": 1700000100.0, "ups": 3}}
                ]
            }
        }"#;

        let listing: Listing = serde_json::from_str(body).unwrap();
        let posts: Vec<HotPost> = listing.data.children.into_iter().map(|c| c.data).collect();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First post");
        assert_eq!(posts[1].created_utc, 1700000100.0);
    }

    #[test]
    fn epoch_roundtrips_to_rfc3339() {
        let ts = epoch_to_datetime(1700000000.0);
        assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn invalid_epoch_falls_back_to_now() {
        let before = Utc::now();
        let ts = epoch_to_datetime(f64::MAX);
        assert!(ts >= before);
    }
}
