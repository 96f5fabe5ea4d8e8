//! Categories and the id → label index served alongside question listings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A question category. Read-only as far as the API is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: String,
}

/// Mapping from category id to display label.
///
/// Serialises as a JSON object keyed by the stringified id, e.g.
/// `{"1":"Science","2":"Art"}`, which is the shape front-ends index into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryIndex(BTreeMap<i64, String>);

impl CategoryIndex {
  /// Build an index from a full category listing. Later duplicates of an id
  /// overwrite earlier ones.
  pub fn from_categories<'a>(
    categories: impl IntoIterator<Item = &'a Category>,
  ) -> Self {
    Self(
      categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cat(id: i64, kind: &str) -> Category {
    Category { id, kind: kind.into() }
  }

  #[test]
  fn index_serialises_as_object_keyed_by_id() {
    let index = CategoryIndex::from_categories(&[
      cat(2, "Art"),
      cat(1, "Science"),
    ]);
    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json, serde_json::json!({ "1": "Science", "2": "Art" }));
  }

  #[test]
  fn later_duplicate_id_overwrites_label() {
    let index = CategoryIndex::from_categories(&[
      cat(4, "History"),
      cat(6, "Sports"),
      cat(4, "Ancient History"),
    ]);
    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json, serde_json::json!({ "4": "Ancient History", "6": "Sports" }));
  }

  #[test]
  fn empty_listing_gives_empty_object() {
    let index = CategoryIndex::from_categories(&Vec::<Category>::new());
    assert_eq!(index, CategoryIndex::default());
    assert_eq!(serde_json::to_string(&index).unwrap(), "{}");
  }

  #[test]
  fn category_serialises_label_as_type() {
    let json = serde_json::to_value(cat(3, "Geography")).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 3, "type": "Geography" }));
  }
}
