//! [`SqliteStore`]: the SQLite implementation of [`TriviaStore`].

use std::{collections::HashSet, path::Path};

use rusqlite::OptionalExtension as _;

use trivia_core::{
  category::Category,
  question::{NewQuestion, Question},
  select::SearchTerm,
  store::TriviaStore,
};

use crate::{
  row::{CATEGORY_COLUMNS, QUESTION_COLUMNS, category_from_row, question_from_row},
  schema::SCHEMA,
  Error, Result,
};

/// Longest exclusion list bound into a `NOT IN (...)` clause. Longer lists
/// are filtered after the query, since SQLite caps bound parameters per
/// statement.
const MAX_BOUND_EXCLUSIONS: usize = 500;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia question bank backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a category with the given label and return it.
  ///
  /// Categories are read-only through the HTTP API; this exists for
  /// start-up configuration and tests.
  pub async fn add_category(&self, label: impl Into<String>) -> Result<Category> {
    let label = label.into();
    let kind = label.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO categories (type) VALUES (?1)",
          rusqlite::params![label],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(Error::classify)?;

    Ok(Category { id, kind })
  }

  /// Make sure a category exists for every label in `labels`, inserting the
  /// missing ones in order. Returns how many were inserted.
  pub async fn ensure_categories(&self, labels: &[String]) -> Result<usize> {
    let labels = labels.to_vec();

    let inserted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut inserted = 0;
        for label in &labels {
          inserted += tx.execute(
            "INSERT INTO categories (type)
             SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM categories WHERE type = ?1)",
            rusqlite::params![label],
          )?;
        }
        tx.commit()?;
        Ok(inserted)
      })
      .await
      .map_err(Error::classify)?;

    if inserted > 0 {
      tracing::info!(inserted, "added configured categories");
    }
    Ok(inserted)
  }

  /// Run a question query with positional integer parameters.
  async fn query_questions(&self, sql: String, params: Vec<i64>) -> Result<Vec<Question>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Question reads ───────────────────────────────────────────────────────

  async fn list_questions(&self) -> Result<Vec<Question>> {
    self
      .query_questions(
        format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
        vec![],
      )
      .await
  }

  async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
    self
      .query_questions(
        format!(
          "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
        ),
        vec![category_id],
      )
      .await
  }

  async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>> {
    // SQLite's LIKE folds ASCII only and treats `%`/`_` as wildcards, so the
    // match itself runs in Rust.
    let mut questions = self.list_questions().await?;
    questions.retain(|q| term.matches(q));
    Ok(questions)
  }

  async fn questions_excluding(
    &self,
    excluded:    &[i64],
    category_id: Option<i64>,
  ) -> Result<Vec<Question>> {
    let bind_ids = excluded.len() <= MAX_BOUND_EXCLUSIONS;
    let mut conds: Vec<String> = vec![];
    let mut params: Vec<i64> = vec![];

    if bind_ids && !excluded.is_empty() {
      params.extend_from_slice(excluded);
      let placeholders = (1..=excluded.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
      conds.push(format!("id NOT IN ({placeholders})"));
    }
    if let Some(category_id) = category_id {
      params.push(category_id);
      conds.push(format!("category = ?{}", params.len()));
    }

    let where_clause = if conds.is_empty() {
      String::new()
    } else {
      format!("WHERE {}", conds.join(" AND "))
    };

    let mut questions = self
      .query_questions(
        format!("SELECT {QUESTION_COLUMNS} FROM questions {where_clause} ORDER BY id"),
        params,
      )
      .await?;

    if !bind_ids {
      let excluded: HashSet<i64> = excluded.iter().copied().collect();
      questions.retain(|q| !excluded.contains(&q.id));
    }
    Ok(questions)
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(question)
  }

  // ── Question writes ─────────────────────────────────────────────────────

  async fn insert_question(&self, input: NewQuestion) -> Result<Question> {
    let NewQuestion { question, answer, category, difficulty } = input;
    let (text, answer_text) = (question.clone(), answer.clone());

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![text, answer_text, category, difficulty],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(Error::classify)?;

    Ok(Question { id, question, answer, category, difficulty })
  }

  async fn delete_question(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id"))?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let category = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
            rusqlite::params![id],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(category)
  }
}
