use crate::model::{PersonCluster, SearchQuery};

/// Scoring seam. Alternate strategies are alternate implementations selected
/// by configuration, not discovered at runtime.
pub trait MatchScoring
where
	Self: Send + Sync,
{
	/// Confidence that `cluster` matches `query`, in [0, 100].
	fn score(&self, cluster: &PersonCluster, query: &SearchQuery) -> f64;
}

/// Ratio of matched comparable query fields to supplied comparable query
/// fields, scaled to 100 and rounded to one decimal place.
#[derive(Debug, Default)]
pub struct FieldOverlapScoring;

impl MatchScoring for FieldOverlapScoring {
	fn score(&self, cluster: &PersonCluster, query: &SearchQuery) -> f64 {
		let mut total = 0_u32;
		let mut hits = 0_u32;
		let name_fields = [
			(query.first_name.as_deref(), cluster.first_name.as_deref()),
			(query.middle_name.as_deref(), cluster.middle_name.as_deref()),
			(query.last_name.as_deref(), cluster.last_name.as_deref()),
		];

		for (queried, stored) in name_fields {
			if is_blank(queried) {
				continue;
			}

			total += 1;

			if eq_ignore_case(queried, stored) {
				hits += 1;
			}
		}

		if let Some(dob) = query.dob {
			total += 1;

			if cluster.dob == Some(dob) {
				hits += 1;
			}
		}

		// The aggregated identity carries no SSN. The row fetch already
		// filtered on ssn_last4, so its presence in the query is counted as an
		// already-satisfied constraint; an approximation, not a verification.
		if !is_blank(query.ssn_last4.as_deref()) {
			total += 1;
			hits += 1;
		}

		if total == 0 {
			return 0.0;
		}

		round1(f64::from(hits) * 100.0 / f64::from(total))
	}
}

fn is_blank(value: Option<&str>) -> bool {
	value.map(|value| value.trim().is_empty()).unwrap_or(true)
}

fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
	// Unicode-aware, matching the identity key's uppercase normalization.
	match (a, b) {
		(Some(a), Some(b)) => a.to_uppercase() == b.to_uppercase(),
		_ => false,
	}
}

fn round1(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}
