//! Typed request bodies, validated at the boundary.
//!
//! Handlers receive the raw JSON value and convert it here, so every failure
//! maps onto an [`ApiError`] kind before any store access happens.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use trivia_core::{
  question::NewQuestion,
  select::{CategoryScope, QuizState, SearchTerm},
};

use crate::error::ApiError;

/// Unwrap a JSON extractor result; a missing or unparsable body is a
/// [`ApiError::BadRequest`].
pub fn json_value(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
  body
    .map(|Json(v)| v)
    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Accept either a JSON integer or a string holding one.
///
/// HTML `<select>` values reach the API as strings (`"3"`), so ids and
/// difficulty scores are read leniently.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
  Int(i64),
  Str(String),
}

impl IntOrString {
  fn into_int<E: serde::de::Error>(self) -> Result<i64, E> {
    match self {
      Self::Int(n) => Ok(n),
      Self::Str(s) => s
        .trim()
        .parse()
        .map_err(|_| E::custom(format!("expected an integer, found {s:?}"))),
    }
  }
}

fn int_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
  IntOrString::deserialize(d)?.into_int()
}

/// [`int_or_string`] for an optional list of ids.
fn ids_or_strings<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<i64>>, D::Error> {
  Option::<Vec<IntOrString>>::deserialize(d)?
    .map(|ids| ids.into_iter().map(IntOrString::into_int).collect::<Result<Vec<_>, _>>())
    .transpose()
}

// ─── POST /questions ──────────────────────────────────────────────────────────

/// JSON body accepted by `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct NewQuestionBody {
  pub question:   String,
  pub answer:     String,
  #[serde(deserialize_with = "int_or_string")]
  pub category:   i64,
  #[serde(deserialize_with = "int_or_string")]
  pub difficulty: i64,
}

impl NewQuestionBody {
  const REQUIRED: [&'static str; 4] = ["question", "answer", "category", "difficulty"];

  /// Absent or `null` fields are a bad request; present fields of the wrong
  /// type are unprocessable.
  pub fn from_json(value: Value) -> Result<Self, ApiError> {
    let object = value
      .as_object()
      .ok_or_else(|| ApiError::BadRequest("body must be a JSON object".into()))?;

    if let Some(field) = Self::REQUIRED
      .iter()
      .find(|field| object.get(**field).is_none_or(Value::is_null))
    {
      return Err(ApiError::BadRequest(format!("missing field `{field}`")));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Unprocessable(Box::new(e)))
  }
}

impl From<NewQuestionBody> for NewQuestion {
  fn from(b: NewQuestionBody) -> Self {
    NewQuestion::new(b.question, b.answer)
      .with_category(b.category)
      .with_difficulty(b.difficulty)
  }
}

// ─── POST /questions/search ───────────────────────────────────────────────────

/// JSON body accepted by `POST /questions/search`: `{"searchTerm": "..."}`.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
}

impl SearchBody {
  pub fn from_json(value: Value) -> Result<SearchTerm, ApiError> {
    let body: Self = serde_json::from_value(value)
      .map_err(|e| ApiError::BadRequest(format!("invalid search body: {e}")))?;
    body
      .search_term
      .map(SearchTerm::new)
      .ok_or_else(|| ApiError::BadRequest("searchTerm is required".into()))
  }
}

// ─── POST /quizzes ────────────────────────────────────────────────────────────

/// The category a quiz is played in. `id` 0 means all categories; the
/// accompanying `type` label is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  #[serde(deserialize_with = "int_or_string")]
  pub id: i64,
}

/// JSON body accepted by `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizBody {
  pub quiz_category:      QuizCategory,
  #[serde(default, deserialize_with = "ids_or_strings")]
  pub previous_questions: Option<Vec<i64>>,
}

impl QuizBody {
  pub fn from_json(value: Value) -> Result<QuizState, ApiError> {
    let body: Self = serde_json::from_value(value)
      .map_err(|e| ApiError::BadRequest(format!("invalid quiz body: {e}")))?;
    Ok(QuizState::new(
      CategoryScope::from_id(body.quiz_category.id),
      body.previous_questions.unwrap_or_default(),
    ))
  }
}
