//! Question selection: search matching, category scoping and the quiz
//! candidate policy.
//!
//! Storage backends may push these filters down into their query language,
//! but the semantics here are authoritative. The SQLite backend delegates
//! search matching to [`SearchTerm::matches`] outright, and the quiz policy
//! in [`next_question`] re-checks whatever candidates a backend returns.

use std::collections::HashSet;

use crate::question::Question;

// ─── Search ──────────────────────────────────────────────────────────────────

/// A case-insensitive, literal substring filter over question text.
///
/// The empty term matches every question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
  raw:    String,
  folded: String,
}

impl SearchTerm {
  pub fn new(raw: impl Into<String>) -> Self {
    let raw = raw.into();
    let folded = raw.to_lowercase();
    Self { raw, folded }
  }

  pub fn as_str(&self) -> &str { &self.raw }

  /// True if the term occurs anywhere in `text`, ignoring case.
  pub fn matches_text(&self, text: &str) -> bool {
    self.folded.is_empty() || text.to_lowercase().contains(&self.folded)
  }

  /// True if the term occurs in the question's text. Answers are not searched.
  pub fn matches(&self, question: &Question) -> bool {
    self.matches_text(&question.question)
  }
}

// ─── Category scope ──────────────────────────────────────────────────────────

/// Which categories a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
  Any,
  Only(i64),
}

impl CategoryScope {
  /// Interpret a client-supplied category id, where `0` means "all".
  pub fn from_id(id: i64) -> Self {
    if id == 0 { Self::Any } else { Self::Only(id) }
  }

  /// The category id to filter on, if any.
  pub fn category_id(self) -> Option<i64> {
    match self {
      Self::Any => None,
      Self::Only(id) => Some(id),
    }
  }

  pub fn admits(self, question: &Question) -> bool {
    match self {
      Self::Any => true,
      Self::Only(id) => question.category == Some(id),
    }
  }
}

// ─── Quiz ────────────────────────────────────────────────────────────────────

/// Per-request quiz state. The server keeps nothing between calls; the
/// client resubmits the ids it has already been shown every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
  pub scope:    CategoryScope,
  pub previous: HashSet<i64>,
}

impl QuizState {
  pub fn new(scope: CategoryScope, previous: impl IntoIterator<Item = i64>) -> Self {
    Self { scope, previous: previous.into_iter().collect() }
  }

  /// Previous ids as a sorted list, handy for building store queries.
  pub fn previous_ids(&self) -> Vec<i64> {
    let mut ids: Vec<i64> = self.previous.iter().copied().collect();
    ids.sort_unstable();
    ids
  }

  /// True if `question` is still eligible: in scope and not yet shown.
  pub fn admits(&self, question: &Question) -> bool {
    self.scope.admits(question) && !self.previous.contains(&question.id)
  }
}

/// Pick the next quiz question from `candidates`.
///
/// Selection is deterministic: the first admissible candidate in the order
/// given (store order) wins. Returns `None` once every question in scope has
/// been shown.
pub fn next_question(
  state: &QuizState,
  candidates: impl IntoIterator<Item = Question>,
) -> Option<Question> {
  candidates.into_iter().find(|q| state.admits(q))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn q(id: i64, text: &str, category: Option<i64>) -> Question {
    Question {
      id,
      question: text.into(),
      answer: "answer".into(),
      category,
      difficulty: Some(1),
    }
  }

  #[test]
  fn search_is_case_insensitive() {
    let question = q(1, "What is the Title of the book?", None);
    assert!(SearchTerm::new("title").matches(&question));
    assert!(SearchTerm::new("TITLE").matches(&question));
    assert!(!SearchTerm::new("author").matches(&question));
  }

  #[test]
  fn empty_search_matches_everything() {
    let term = SearchTerm::new("");
    assert!(term.matches(&q(1, "anything", None)));
    assert!(term.matches(&q(2, "", None)));
  }

  #[test]
  fn search_is_literal_not_a_pattern() {
    let term = SearchTerm::new("100%");
    assert!(term.matches(&q(1, "Is it 100% true?", None)));
    assert!(!term.matches(&q(2, "Is it 1000 true?", None)));
    assert!(!SearchTerm::new("a_b").matches(&q(3, "axb", None)));
  }

  #[test]
  fn search_folds_non_ascii() {
    assert!(SearchTerm::new("ÉCOLE").matches(&q(1, "Quelle école ?", None)));
  }

  #[test]
  fn scope_zero_is_any() {
    assert_eq!(CategoryScope::from_id(0), CategoryScope::Any);
    assert_eq!(CategoryScope::from_id(4), CategoryScope::Only(4));
    assert_eq!(CategoryScope::Any.category_id(), None);
    assert_eq!(CategoryScope::Only(4).category_id(), Some(4));
  }

  #[test]
  fn scoped_quiz_ignores_uncategorised_questions() {
    let state = QuizState::new(CategoryScope::Only(2), []);
    assert!(!state.admits(&q(1, "a", None)));
    assert!(!state.admits(&q(2, "b", Some(3))));
    assert!(state.admits(&q(3, "c", Some(2))));
  }

  #[test]
  fn next_question_skips_previous_and_takes_first() {
    let pool: Vec<Question> = (1..=6).map(|id| q(id, "x", Some(1))).collect();
    let state = QuizState::new(CategoryScope::Any, [1, 2, 3]);
    let next = next_question(&state, pool).unwrap();
    assert_eq!(next.id, 4);
  }

  #[test]
  fn next_question_respects_scope() {
    let pool = vec![
      q(1, "a", Some(1)),
      q(2, "b", Some(2)),
      q(3, "c", Some(1)),
      q(4, "d", Some(2)),
    ];
    let state = QuizState::new(CategoryScope::Only(2), [2]);
    assert_eq!(next_question(&state, pool).map(|q| q.id), Some(4));
  }

  #[test]
  fn exhausted_quiz_yields_none() {
    let pool = vec![q(1, "a", Some(1)), q(2, "b", Some(1))];
    let state = QuizState::new(CategoryScope::Only(1), [1, 2]);
    assert!(next_question(&state, pool).is_none());
  }

  #[test]
  fn previous_ids_are_sorted_and_deduplicated() {
    let state = QuizState::new(CategoryScope::Any, [5, 1, 5, 3]);
    assert_eq!(state.previous_ids(), vec![1, 3, 5]);
  }
}
