//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions` | `?page=N`; all questions plus the category index |
//! | `POST`   | `/questions` | Body: [`NewQuestionBody`]; returns the new id |
//! | `DELETE` | `/questions/{id}` | 404 if not found |
//! | `POST`   | `/questions/search` | Body: `{"searchTerm":"..."}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
};
use serde::Serialize;
use serde_json::Value;
use trivia_core::{
  category::CategoryIndex,
  page::paginate,
  question::{NewQuestion, Question},
  store::TriviaStore,
};

use crate::{
  PageParams,
  body::{NewQuestionBody, SearchBody, json_value},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionList {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Size of the whole bank, not of this page.
  pub total_questions:  usize,
  pub categories:       CategoryIndex,
  /// Always `null`: the listing spans every category.
  pub current_category: Option<String>,
}

/// `GET /questions[?page=N]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionList>, ApiError>
where
  S: TriviaStore,
{
  let page = PageParams::page_of(params);

  let questions = store
    .list_questions()
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;
  let categories = store
    .list_categories()
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  Ok(Json(QuestionList {
    success:          true,
    questions:        paginate(&questions, page).to_vec(),
    total_questions:  questions.len(),
    categories:       CategoryIndex::from_categories(&categories),
    current_category: None,
  }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Created {
  pub success: bool,
  pub id:      i64,
}

/// `POST /questions`
///
/// Any store failure on insert, including an unknown category id, is
/// reported as 422.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Created>, ApiError>
where
  S: TriviaStore,
{
  let input = NewQuestionBody::from_json(json_value(body)?)?;

  let question = store
    .insert_question(NewQuestion::from(input))
    .await
    .map_err(|e| ApiError::Unprocessable(Box::new(e)))?;

  tracing::info!(id = question.id, "question created");
  Ok(Json(Created { success: true, id: question.id }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub success: bool,
  pub deleted: i64,
}

/// `DELETE /questions/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Deleted>, ApiError>
where
  S: TriviaStore,
{
  let Path(id) = id.map_err(|e| ApiError::NotFound(e.body_text()))?;
  let not_found = || ApiError::NotFound(format!("question {id} not found"));

  store
    .get_question(id)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?
    .ok_or_else(not_found)?;

  // A concurrent delete may win between the lookup and here.
  let removed = store
    .delete_question(id)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;
  if !removed {
    return Err(not_found());
  }

  tracing::info!(id, "question deleted");
  Ok(Json(Deleted { success: true, deleted: id }))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SearchResults {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Number of matches across all pages.
  pub total_questions:  usize,
  #[serde(rename = "currentCategory")]
  pub current_category: Option<String>,
}

/// `POST /questions/search[?page=N]`
pub async fn search<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<PageParams>, QueryRejection>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResults>, ApiError>
where
  S: TriviaStore,
{
  let term = SearchBody::from_json(json_value(body)?)?;
  let page = PageParams::page_of(params);

  let matches = store
    .search_questions(&term)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;
  tracing::debug!(term = term.as_str(), hits = matches.len(), "search");

  Ok(Json(SearchResults {
    success:          true,
    questions:        paginate(&matches, page).to_vec(),
    total_questions:  matches.len(),
    current_category: None,
  }))
}
