use ahash::AHashMap;

use crate::model::{CaseRecord, IdentityKey, PersonCluster, RawCaseRow};

/// Groups rows into per-person clusters in one pass, preserving the first-seen
/// order of distinct identities. Every row contributes exactly one case record
/// to exactly one cluster, appended in arrival order.
pub fn aggregate(rows: &[RawCaseRow]) -> Vec<PersonCluster> {
	let mut clusters: Vec<PersonCluster> = Vec::new();
	let mut index: AHashMap<IdentityKey, usize> = AHashMap::new();

	for row in rows {
		let key = IdentityKey::of(row);
		let slot = *index.entry(key.clone()).or_insert_with(|| {
			clusters.push(PersonCluster::seeded_from(key, row));
			clusters.len() - 1
		});

		clusters[slot].cases.push(CaseRecord::from_row(row));
	}

	clusters
}

#[cfg(test)]
mod tests {
	use time::macros::date;

	use super::*;

	fn row(first: &str, last: &str, case_number: &str) -> RawCaseRow {
		RawCaseRow {
			first_name: Some(first.to_string()),
			last_name: Some(last.to_string()),
			case_number: Some(case_number.to_string()),
			..RawCaseRow::default()
		}
	}

	#[test]
	fn empty_input_yields_no_clusters() {
		assert!(aggregate(&[]).is_empty());
	}

	#[test]
	fn case_count_matches_row_count() {
		let rows = vec![
			row("John", "Doe", "C1"),
			row("Jane", "Smith", "C2"),
			row("John", "Doe", "C3"),
			row("Jane", "Smith", "C4"),
			row("Alex", "Stone", "C5"),
		];
		let clusters = aggregate(&rows);
		let total: usize = clusters.iter().map(|cluster| cluster.cases.len()).sum();

		assert_eq!(total, rows.len());
	}

	#[test]
	fn case_insensitive_identities_share_one_cluster() {
		let rows = vec![row("JOHN", "DOE", "C1"), row("john", "doe", "C2")];
		let clusters = aggregate(&rows);

		assert_eq!(clusters.len(), 1);
		assert_eq!(clusters[0].cases.len(), 2);
	}

	#[test]
	fn permuted_input_still_groups_each_identity_once() {
		let forward = vec![
			row("John", "Doe", "C1"),
			row("Jane", "Smith", "C2"),
			row("John", "Doe", "C3"),
		];
		let mut reversed = forward.clone();

		reversed.reverse();

		assert_eq!(aggregate(&forward).len(), 2);
		assert_eq!(aggregate(&reversed).len(), 2);
	}

	#[test]
	fn clusters_keep_first_seen_order() {
		let rows = vec![
			row("Jane", "Smith", "C1"),
			row("John", "Doe", "C2"),
			row("Jane", "Smith", "C3"),
		];
		let clusters = aggregate(&rows);

		assert_eq!(clusters[0].last_name.as_deref(), Some("Smith"));
		assert_eq!(clusters[1].last_name.as_deref(), Some("Doe"));
	}

	#[test]
	fn representative_fields_come_from_the_first_row() {
		let rows = vec![
			RawCaseRow { sex: Some("M".to_string()), ..row("John", "Doe", "C1") },
			// Same identity key fields must match, so vary only case fields.
			RawCaseRow {
				sex: Some("M".to_string()),
				county: Some("Duval".to_string()),
				..row("John", "Doe", "C2")
			},
		];
		let clusters = aggregate(&rows);

		assert_eq!(clusters.len(), 1);
		assert_eq!(clusters[0].sex.as_deref(), Some("M"));
		assert_eq!(clusters[0].cases[1].county.as_deref(), Some("Duval"));
	}

	#[test]
	fn cases_append_in_arrival_order() {
		let rows = vec![
			RawCaseRow { file_date: Some(date!(2021 - 06 - 01)), ..row("John", "Doe", "C2") },
			RawCaseRow { file_date: Some(date!(2020 - 01 - 01)), ..row("John", "Doe", "C1") },
		];
		let clusters = aggregate(&rows);

		assert_eq!(clusters[0].cases[0].case_number.as_deref(), Some("C2"));
		assert_eq!(clusters[0].cases[1].case_number.as_deref(), Some("C1"));
	}
}
