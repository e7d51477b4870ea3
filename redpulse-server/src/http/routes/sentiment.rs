//! Classified post endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{ClassifiedPost, PostRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// One classified post, timestamps as RFC 3339
#[derive(Serialize)]
pub struct ClassifiedPostResponse {
    pub id: i64,
    pub title: String,
    pub sentiment: String,
    pub created_at: String,
}

impl From<ClassifiedPost> for ClassifiedPostResponse {
    fn from(p: ClassifiedPost) -> Self {
        Self {
            id: p.id,
            title: p.title,
            sentiment: p.sentiment,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// GET /reddit-sentiment - list all committed classified posts
async fn list_sentiment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ClassifiedPostResponse>>, ApiError> {
    let posts = PostRepo::new(&state.pool).list_all().await?;

    Ok(Json(
        posts.into_iter().map(ClassifiedPostResponse::from).collect(),
    ))
}

/// Sentiment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reddit-sentiment", get(list_sentiment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn created_at_serializes_as_rfc3339() {
        let post = ClassifiedPost {
            id: 7,
            title: "Launch went great".to_string(),
            sentiment: "positive".to_string(),
            created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let response = ClassifiedPostResponse::from(post);
        assert_eq!(response.created_at, "2023-11-14T22:13:20+00:00");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["created_at"], "2023-11-14T22:13:20+00:00");
    }
}
