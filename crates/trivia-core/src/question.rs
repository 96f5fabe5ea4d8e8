//! Question: the single record type the quiz is built from.

use serde::{Deserialize, Serialize};

/// A stored trivia question.
///
/// `category` and `difficulty` are nullable in storage: rows written by older
/// tooling may lack either, and readers must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  /// Store-assigned; never changes after insert.
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub category:   Option<i64>,
  pub difficulty: Option<i64>,
}

/// Input to [`crate::store::TriviaStore::insert_question`].
/// `id` is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub category:   Option<i64>,
  pub difficulty: Option<i64>,
}

impl NewQuestion {
  /// Convenience constructor with category and difficulty unset.
  pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
    Self {
      question:   question.into(),
      answer:     answer.into(),
      category:   None,
      difficulty: None,
    }
  }

  pub fn with_category(mut self, category: i64) -> Self {
    self.category = Some(category);
    self
  }

  pub fn with_difficulty(mut self, difficulty: i64) -> Self {
    self.difficulty = Some(difficulty);
    self
  }
}
