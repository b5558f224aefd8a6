// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Publication statistics derived from a page of catalog items.
//!
//! All statistics are computed over the returned page only, never across
//! pages. Items with missing or unparseable fields are skipped, not
//! treated as errors.

use std::collections::HashMap;

use chrono::NaiveDate;
use folio_server_catalog_google_books::CatalogItem;

/// Fallback value when no item on the page carries an author.
pub const NO_AUTHOR: &str = "N/A";

/// Returns the most frequent author across all author occurrences on the
/// page.
///
/// Every entry of every item's author list counts as one occurrence. Ties
/// are broken deterministically: the author whose first occurrence comes
/// earliest in item order wins. Returns [`NO_AUTHOR`] when the page has
/// no authors at all.
pub fn most_common_author(items: &[CatalogItem]) -> String {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	let mut first_seen: Vec<&str> = Vec::new();

	for item in items {
		for author in &item.volume_info.authors {
			let count = counts.entry(author.as_str()).or_insert(0);
			if *count == 0 {
				first_seen.push(author.as_str());
			}
			*count += 1;
		}
	}

	let mut best: Option<(&str, usize)> = None;
	for name in first_seen {
		let count = counts[name];
		// Strict comparison keeps the earliest first occurrence on ties.
		if best.map_or(true, |(_, best_count)| count > best_count) {
			best = Some((name, count));
		}
	}

	best.map(|(name, _)| name.to_string())
		.unwrap_or_else(|| NO_AUTHOR.to_string())
}

/// Returns the earliest and most recent publication dates on the page,
/// formatted as `YYYY-MM-DD`.
///
/// Upstream dates may be partial (`YYYY` or `YYYY-MM`); these resolve to
/// the first day of the period. Unparseable dates are discarded. Both
/// fields are `None` when no date on the page parses.
pub fn publication_date_range(items: &[CatalogItem]) -> (Option<String>, Option<String>) {
	let mut earliest: Option<NaiveDate> = None;
	let mut most_recent: Option<NaiveDate> = None;

	for item in items {
		if let Some(date) = item
			.volume_info
			.published_date
			.as_deref()
			.and_then(parse_published_date)
		{
			earliest = Some(earliest.map_or(date, |d| d.min(date)));
			most_recent = Some(most_recent.map_or(date, |d| d.max(date)));
		}
	}

	(
		earliest.map(|d| d.format("%Y-%m-%d").to_string()),
		most_recent.map(|d| d.format("%Y-%m-%d").to_string()),
	)
}

/// Parse an upstream publication date, accepting `YYYY-MM-DD`, `YYYY-MM`
/// and `YYYY`. Partial dates resolve to the first day of the period.
fn parse_published_date(raw: &str) -> Option<NaiveDate> {
	let trimmed = raw.trim();

	if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
		return Some(date);
	}
	if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
		return Some(date);
	}
	if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01-01"), "%Y-%m-%d") {
		return Some(date);
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use folio_server_catalog_google_books::VolumeInfo;
	use proptest::prelude::*;

	fn item(authors: &[&str], published_date: Option<&str>) -> CatalogItem {
		CatalogItem {
			id: None,
			volume_info: VolumeInfo {
				title: None,
				authors: authors.iter().map(|a| a.to_string()).collect(),
				published_date: published_date.map(str::to_string),
				description: None,
				extra: serde_json::Map::new(),
			},
			extra: serde_json::Map::new(),
		}
	}

	#[test]
	fn test_single_author_wins() {
		let items = vec![item(&["James Clear"], None)];
		assert_eq!(most_common_author(&items), "James Clear");
	}

	#[test]
	fn test_majority_author_wins() {
		let items = vec![
			item(&["James Clear"], None),
			item(&["BJ Fogg"], None),
			item(&["James Clear"], None),
		];
		assert_eq!(most_common_author(&items), "James Clear");
	}

	#[test]
	fn test_tie_goes_to_first_occurrence() {
		let items = vec![
			item(&["BJ Fogg"], None),
			item(&["James Clear"], None),
			item(&["James Clear"], None),
			item(&["BJ Fogg"], None),
		];
		assert_eq!(most_common_author(&items), "BJ Fogg");
	}

	#[test]
	fn test_multi_author_items_count_each_occurrence() {
		let items = vec![
			item(&["Chip Heath", "Dan Heath"], None),
			item(&["Dan Heath"], None),
		];
		assert_eq!(most_common_author(&items), "Dan Heath");
	}

	#[test]
	fn test_no_authors_is_not_available() {
		assert_eq!(most_common_author(&[]), NO_AUTHOR);

		let items = vec![item(&[], None), item(&[], Some("2018-10-16"))];
		assert_eq!(most_common_author(&items), NO_AUTHOR);
	}

	#[test]
	fn test_parse_full_date() {
		assert_eq!(
			parse_published_date("2018-10-16"),
			NaiveDate::from_ymd_opt(2018, 10, 16)
		);
	}

	#[test]
	fn test_parse_year_month_resolves_to_first_day() {
		assert_eq!(
			parse_published_date("2018-10"),
			NaiveDate::from_ymd_opt(2018, 10, 1)
		);
	}

	#[test]
	fn test_parse_year_resolves_to_january_first() {
		assert_eq!(
			parse_published_date("2018"),
			NaiveDate::from_ymd_opt(2018, 1, 1)
		);
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert_eq!(parse_published_date(""), None);
		assert_eq!(parse_published_date("unknown"), None);
		assert_eq!(parse_published_date("19??"), None);
		assert_eq!(parse_published_date("2018-13-01"), None);
	}

	#[test]
	fn test_range_single_date_fills_both_ends() {
		let items = vec![item(&[], Some("2018-10-16"))];
		let (earliest, most_recent) = publication_date_range(&items);
		assert_eq!(earliest.as_deref(), Some("2018-10-16"));
		assert_eq!(most_recent.as_deref(), Some("2018-10-16"));
	}

	#[test]
	fn test_range_orders_by_value_not_position() {
		let items = vec![
			item(&[], Some("2020-05-05")),
			item(&[], Some("2018-01-01")),
		];
		let (earliest, most_recent) = publication_date_range(&items);
		assert_eq!(earliest.as_deref(), Some("2018-01-01"));
		assert_eq!(most_recent.as_deref(), Some("2020-05-05"));

		let reversed = vec![
			item(&[], Some("2018-01-01")),
			item(&[], Some("2020-05-05")),
		];
		assert_eq!(publication_date_range(&reversed), (earliest, most_recent));
	}

	#[test]
	fn test_range_discards_unparseable_dates() {
		let items = vec![
			item(&[], Some("unknown")),
			item(&[], Some("2019-06")),
			item(&[], None),
		];
		let (earliest, most_recent) = publication_date_range(&items);
		assert_eq!(earliest.as_deref(), Some("2019-06-01"));
		assert_eq!(most_recent.as_deref(), Some("2019-06-01"));
	}

	#[test]
	fn test_range_empty_when_no_date_parses() {
		let items = vec![item(&["James Clear"], Some("someday")), item(&[], None)];
		assert_eq!(publication_date_range(&items), (None, None));
	}

	#[test]
	fn test_range_normalizes_partial_dates() {
		let items = vec![item(&[], Some("2018")), item(&[], Some("2018-10-16"))];
		let (earliest, most_recent) = publication_date_range(&items);
		assert_eq!(earliest.as_deref(), Some("2018-01-01"));
		assert_eq!(most_recent.as_deref(), Some("2018-10-16"));
	}

	fn date_string() -> impl Strategy<Value = String> {
		(1500i32..2100, 1u32..13, 1u32..29)
			.prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
	}

	proptest! {
		/// Property: full dates round-trip through the parser unchanged.
		#[test]
		fn prop_full_dates_round_trip(raw in date_string()) {
			let parsed = parse_published_date(&raw).unwrap();
			prop_assert_eq!(parsed.format("%Y-%m-%d").to_string(), raw);
		}

		/// Property: the range is ordered and present iff a date parses.
		#[test]
		fn prop_range_is_ordered(dates in proptest::collection::vec(date_string(), 0..8)) {
			let items: Vec<CatalogItem> =
				dates.iter().map(|d| item(&[], Some(d))).collect();
			let (earliest, most_recent) = publication_date_range(&items);

			prop_assert_eq!(earliest.is_some(), !dates.is_empty());
			prop_assert_eq!(most_recent.is_some(), !dates.is_empty());
			if let (Some(lo), Some(hi)) = (earliest, most_recent) {
				// Lexicographic order matches chronological order for
				// zero-padded YYYY-MM-DD strings.
				prop_assert!(lo <= hi);
			}
		}

		/// Property: the winner's occurrence count is maximal.
		#[test]
		fn prop_mode_author_is_maximal(
			author_lists in proptest::collection::vec(
				proptest::collection::vec(0u8..5, 0..3),
				0..6,
			)
		) {
			let items: Vec<CatalogItem> = author_lists
				.iter()
				.map(|authors| {
					let names: Vec<String> =
						authors.iter().map(|i| format!("Author {i}")).collect();
					let refs: Vec<&str> = names.iter().map(String::as_str).collect();
					item(&refs, None)
				})
				.collect();

			let winner = most_common_author(&items);

			let mut counts: std::collections::HashMap<String, usize> =
				std::collections::HashMap::new();
			for authors in &author_lists {
				for i in authors {
					*counts.entry(format!("Author {i}")).or_insert(0) += 1;
				}
			}

			if counts.is_empty() {
				prop_assert_eq!(winner, NO_AUTHOR);
			} else {
				let max = counts.values().copied().max().unwrap();
				prop_assert_eq!(counts.get(&winner).copied(), Some(max));
			}
		}
	}
}
