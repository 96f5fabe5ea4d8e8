//! The `TriviaStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend,
//! and receives an instance at router construction.

use std::future::Future;

use crate::{
  category::Category,
  question::{NewQuestion, Question},
  select::SearchTerm,
};

/// Abstraction over a trivia question bank.
///
/// Every listing returns questions in store order: ascending `id`, which is
/// insertion order. Quiz selection relies on that order being stable.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Question reads ───────────────────────────────────────────────────

  /// Every stored question.
  fn list_questions(
    &self,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Questions whose category is exactly `category_id`.
  fn questions_in_category(
    &self,
    category_id: i64,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Questions whose text contains `term`, ignoring case.
  fn search_questions<'a>(
    &'a self,
    term: &'a SearchTerm,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Questions whose id is not in `excluded`, further restricted to
  /// `category_id` when one is given.
  fn questions_excluding<'a>(
    &'a self,
    excluded: &'a [i64],
    category_id: Option<i64>,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  // ── Question writes ─────────────────────────────────────────────────

  /// Persist a new question and return it with its assigned id.
  ///
  /// Backends that enforce referential integrity reject a `category` that
  /// names no stored category.
  fn insert_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Delete a question. Returns `false` if no question had that id.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Categories ────────────────────────────────────────────────────────

  /// Every category, ordered by id.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;
}
