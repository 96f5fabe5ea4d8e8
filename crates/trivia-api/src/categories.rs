//! Handlers for `/categories` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | `{success, categories: {id: type}}` |
//! | `GET`  | `/categories/{id}/questions` | `?page=N`; 404 if the category is unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::{PathRejection, QueryRejection}},
};
use serde::Serialize;
use trivia_core::{
  category::CategoryIndex,
  page::paginate,
  question::Question,
  store::TriviaStore,
};

use crate::{PageParams, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryList {
  pub success:    bool,
  pub categories: CategoryIndex,
}

/// `GET /categories`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<CategoryList>, ApiError>
where
  S: TriviaStore,
{
  let categories = store
    .list_categories()
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  Ok(Json(CategoryList {
    success:    true,
    categories: CategoryIndex::from_categories(&categories),
  }))
}

// ─── Questions in a category ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Matches in the category, not just on this page.
  pub total_questions:  usize,
  /// Label of the requested category.
  pub current_category: String,
}

/// `GET /categories/{id}/questions[?page=N]`
pub async fn questions<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<CategoryQuestions>, ApiError>
where
  S: TriviaStore,
{
  let Path(id) = id.map_err(|e| ApiError::NotFound(e.body_text()))?;
  let page = PageParams::page_of(params);

  let category = store
    .get_category(id)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("category {id} not found")))?;

  let matches = store
    .questions_in_category(id)
    .await
    .map_err(|e| ApiError::Internal(Box::new(e)))?;

  Ok(Json(CategoryQuestions {
    success:          true,
    questions:        paginate(&matches, page).to_vec(),
    total_questions:  matches.len(),
    current_category: category.kind,
  }))
}
