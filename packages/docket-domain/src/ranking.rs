use std::cmp::Ordering;

use time::Date;

use crate::model::PersonCluster;

/// Orders clusters by the most recent file date across their cases, newest
/// first. Clusters with no dated case sort after all dated clusters and keep
/// their aggregation order relative to each other (the sort is stable). Score
/// is deliberately not part of the key; ranking is recency-first.
pub fn rank(clusters: &mut [PersonCluster]) {
	clusters.sort_by(|a, b| match (max_file_date(a), max_file_date(b)) {
		(Some(a), Some(b)) => b.cmp(&a),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	});
}

pub fn max_file_date(cluster: &PersonCluster) -> Option<Date> {
	cluster.cases.iter().filter_map(|case| case.file_date).max()
}
