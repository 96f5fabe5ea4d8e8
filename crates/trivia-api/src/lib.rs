//! JSON REST API for the trivia question bank.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//! The store is injected at construction; handlers keep no state between
//! requests.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = trivia_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod body;
pub mod categories;
pub mod config;
pub mod error;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::{
  Router,
  extract::{Query, rejection::QueryRejection},
  http::{HeaderValue, Method, header},
  routing::{delete, get, post},
};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  set_header::SetResponseHeaderLayer,
};
use trivia_core::{page::PageNumber, store::TriviaStore};

pub use config::ServerConfig;
pub use error::ApiError;

/// Value of `Access-Control-Allow-Headers` on every response.
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization,true";
/// Value of `Access-Control-Allow-Methods` on every response.
pub const ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Cross-origin requests are allowed from anywhere.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TriviaStore + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>))
    .route("/categories/{id}/questions", get(categories::questions::<S>))
    // Questions
    .route("/questions", get(questions::list::<S>).post(questions::create::<S>))
    .route("/questions/search", post(questions::search::<S>))
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    // Quiz
    .route("/quizzes", post(quizzes::next::<S>))
    .fallback(unknown_route)
    .with_state(store)
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
          Method::GET,
          Method::PUT,
          Method::POST,
          Method::DELETE,
          Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
    )
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static(ALLOW_HEADERS),
    ))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_METHODS,
      HeaderValue::from_static(ALLOW_METHODS),
    ))
}

async fn unknown_route() -> ApiError { ApiError::NotFound("no such route".into()) }

// ─── Pagination ───────────────────────────────────────────────────────────────

/// `?page=N` query parameter shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
  /// Kept as raw text so a malformed value falls back to page 1 instead of
  /// failing the request.
  pub page: Option<String>,
}

impl PageParams {
  pub(crate) fn page_of(params: Result<Query<Self>, QueryRejection>) -> PageNumber {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    PageNumber::parse_lenient(params.page.as_deref())
  }
}
