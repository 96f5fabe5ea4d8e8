//! Fixed-size pagination over an already-ordered result set.

/// Number of questions returned per page. Not client-configurable.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number as supplied by the client.
///
/// Any integer is representable: pages below 1 are legal input and simply
/// address nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(i64);

impl PageNumber {
  pub const FIRST: Self = Self(1);

  pub fn new(n: i64) -> Self { Self(n) }

  /// Parse a raw query-string value. Absent or non-integer input falls back
  /// to the first page.
  pub fn parse_lenient(raw: Option<&str>) -> Self {
    raw
      .and_then(|s| s.trim().parse::<i64>().ok())
      .map(Self)
      .unwrap_or(Self::FIRST)
  }

  pub fn get(self) -> i64 { self.0 }

  /// Half-open index range `[start, end)` this page covers, or `None` when
  /// the page number is below 1 or too large to address anything.
  fn bounds(self) -> Option<(usize, usize)> {
    let zero_based = usize::try_from(self.0.checked_sub(1)?).ok()?;
    let start = zero_based.checked_mul(PAGE_SIZE)?;
    Some((start, start.saturating_add(PAGE_SIZE)))
  }
}

impl Default for PageNumber {
  fn default() -> Self { Self::FIRST }
}

/// Return the slice of `items` that falls on `page`.
///
/// Slicing is clamped: a page past the end yields an empty slice, never an
/// error.
pub fn paginate<T>(items: &[T], page: PageNumber) -> &[T] {
  let Some((start, end)) = page.bounds() else {
    return &[];
  };
  let start = start.min(items.len());
  let end = end.min(items.len());
  &items[start..end]
}

#[cfg(test)]
mod tests {
  use super::*;

  fn expected_len(n: usize, page: i64) -> usize {
    let remaining = n as i64 - PAGE_SIZE as i64 * (page - 1);
    remaining.clamp(0, PAGE_SIZE as i64) as usize
  }

  #[test]
  fn page_sizes_follow_formula() {
    for n in [0usize, 1, 9, 10, 11, 19, 20, 21, 35] {
      let items: Vec<usize> = (0..n).collect();
      for page in 1..=5 {
        let got = paginate(&items, PageNumber::new(page)).len();
        assert_eq!(got, expected_len(n, page), "n={n} page={page}");
      }
    }
  }

  #[test]
  fn pages_concatenate_to_full_set() {
    let items: Vec<usize> = (0..27).collect();
    let mut rebuilt = Vec::new();
    let mut page = 1;
    loop {
      let slice = paginate(&items, PageNumber::new(page));
      if slice.is_empty() {
        break;
      }
      rebuilt.extend_from_slice(slice);
      page += 1;
    }
    assert_eq!(rebuilt, items);
    assert_eq!(page, 4);
  }

  #[test]
  fn second_page_starts_at_eleventh_item() {
    let items: Vec<usize> = (1..=15).collect();
    assert_eq!(paginate(&items, PageNumber::new(2)), &[11, 12, 13, 14, 15]);
  }

  #[test]
  fn out_of_range_pages_are_empty() {
    let items: Vec<usize> = (0..5).collect();
    assert!(paginate(&items, PageNumber::new(2)).is_empty());
    assert!(paginate(&items, PageNumber::new(0)).is_empty());
    assert!(paginate(&items, PageNumber::new(-3)).is_empty());
    assert!(paginate(&items, PageNumber::new(i64::MAX)).is_empty());
  }

  #[test]
  fn lenient_parse_defaults_to_first_page() {
    assert_eq!(PageNumber::parse_lenient(None), PageNumber::FIRST);
    assert_eq!(PageNumber::parse_lenient(Some("abc")), PageNumber::FIRST);
    assert_eq!(PageNumber::parse_lenient(Some("")), PageNumber::FIRST);
    assert_eq!(PageNumber::parse_lenient(Some("3")).get(), 3);
    assert_eq!(PageNumber::parse_lenient(Some("-1")).get(), -1);
  }
}
