//! Handler for `POST /quizzes`.
//!
//! Body: `{"quiz_category": {"id": 0, "type": "..."}, "previous_questions": [ids]}`.
//! The server is stateless between turns: the client resubmits every id it
//! has already been shown, and gets back the first unseen question in store
//! order, or `"question": null` once the category is exhausted.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use serde_json::Value;
use trivia_core::{
  question::Question,
  select::next_question,
  store::TriviaStore,
};

use crate::{
  body::{QuizBody, json_value},
  error::ApiError,
};

#[derive(Debug, Serialize)]
pub struct NextQuestion {
  pub success:  bool,
  /// `None` once every question in scope has been asked.
  pub question: Option<Question>,
}

/// `POST /quizzes`
pub async fn next<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NextQuestion>, ApiError>
where
  S: TriviaStore,
{
  let state = QuizBody::from_json(json_value(body)?)?;
  let excluded = state.previous_ids();

  let candidates = store
    .questions_excluding(&excluded, state.scope.category_id())
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  let question = next_question(&state, candidates);
  if question.is_none() {
    tracing::debug!(scope = ?state.scope, asked = excluded.len(), "quiz exhausted");
  }

  Ok(Json(NextQuestion { success: true, question }))
}
