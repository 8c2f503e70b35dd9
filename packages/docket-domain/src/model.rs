use time::Date;

/// One case-person pairing as fetched from the row store. A person with N
/// cases yields N rows sharing the identity fields. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCaseRow {
	pub first_name: Option<String>,
	pub middle_name: Option<String>,
	pub last_name: Option<String>,
	pub suffix: Option<String>,
	pub dob: Option<Date>,
	pub sex: Option<String>,
	pub race: Option<String>,
	pub dl_state: Option<String>,
	pub dl_number: Option<String>,
	pub county: Option<String>,
	pub state: Option<String>,
	pub case_number: Option<String>,
	pub charge: Option<String>,
	pub charge_type: Option<String>,
	pub disposition_type: Option<String>,
	pub disposition_date: Option<Date>,
	pub file_date: Option<Date>,
	pub offense_date: Option<Date>,
}

/// Case-insensitive, null-normalized composite of a row's identity fields.
/// Two rows with an equal key are assumed to describe the same person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
	first: String,
	middle: String,
	last: String,
	suffix: String,
	dob: String,
	sex: String,
	race: String,
	driver_license: String,
}

impl IdentityKey {
	/// Pure function of the row's identity fields; `None` and `""` collapse to
	/// the same token and casing never matters.
	pub fn of(row: &RawCaseRow) -> Self {
		let dl = combine_driver_license(row.dl_state.as_deref(), row.dl_number.as_deref());

		Self {
			first: normalize(row.first_name.as_deref()),
			middle: normalize(row.middle_name.as_deref()),
			last: normalize(row.last_name.as_deref()),
			suffix: normalize(row.suffix.as_deref()),
			dob: row.dob.map(|dob| dob.to_string()).unwrap_or_default(),
			sex: normalize(row.sex.as_deref()),
			race: normalize(row.race.as_deref()),
			driver_license: normalize(dl.as_deref()),
		}
	}
}

fn normalize(value: Option<&str>) -> String {
	value.map(str::to_uppercase).unwrap_or_default()
}

/// Joins a license jurisdiction and number into the combined form used across
/// the API, e.g. "FL-ABC123456". Either part may stand alone; two blanks
/// yield `None`.
pub fn combine_driver_license(state: Option<&str>, number: Option<&str>) -> Option<String> {
	let state = state.map(str::trim).filter(|part| !part.is_empty());
	let number = number.map(str::trim).filter(|part| !part.is_empty());

	match (state, number) {
		(Some(state), Some(number)) => Some(format!("{state}-{number}")),
		(Some(state), None) => Some(state.to_string()),
		(None, Some(number)) => Some(number.to_string()),
		(None, None) => None,
	}
}

/// Case fields copied verbatim from one [`RawCaseRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
	pub county: Option<String>,
	pub state: Option<String>,
	pub case_number: Option<String>,
	pub charge: Option<String>,
	pub charge_type: Option<String>,
	pub disposition_type: Option<String>,
	pub disposition_date: Option<Date>,
	pub file_date: Option<Date>,
	pub offense_date: Option<Date>,
}

impl CaseRecord {
	pub fn from_row(row: &RawCaseRow) -> Self {
		Self {
			county: row.county.clone(),
			state: row.state.clone(),
			case_number: row.case_number.clone(),
			charge: row.charge.clone(),
			charge_type: row.charge_type.clone(),
			disposition_type: row.disposition_type.clone(),
			disposition_date: row.disposition_date,
			file_date: row.file_date,
			offense_date: row.offense_date,
		}
	}
}

/// All case records grouped under one identity key, with representative
/// identity fields taken from the first row observed for the key. Mutated only
/// during aggregation; the score is frozen once scoring runs.
#[derive(Debug, Clone)]
pub struct PersonCluster {
	pub key: IdentityKey,
	pub first_name: Option<String>,
	pub middle_name: Option<String>,
	pub last_name: Option<String>,
	pub suffix: Option<String>,
	pub dob: Option<Date>,
	pub sex: Option<String>,
	pub race: Option<String>,
	pub driver_license: Option<String>,
	pub cases: Vec<CaseRecord>,
	pub match_score: f64,
}

impl PersonCluster {
	/// Seeds a cluster from the first row observed for `key`; no case is
	/// attached yet.
	pub fn seeded_from(key: IdentityKey, row: &RawCaseRow) -> Self {
		Self {
			key,
			first_name: row.first_name.clone(),
			middle_name: row.middle_name.clone(),
			last_name: row.last_name.clone(),
			suffix: row.suffix.clone(),
			dob: row.dob,
			sex: row.sex.clone(),
			race: row.race.clone(),
			driver_license: combine_driver_license(
				row.dl_state.as_deref(),
				row.dl_number.as_deref(),
			),
			cases: Vec::new(),
			match_score: 0.0,
		}
	}
}

/// Caller-supplied filters the scorer compares against. Pagination and
/// row-store filters live at the service layer.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
	pub first_name: Option<String>,
	pub middle_name: Option<String>,
	pub last_name: Option<String>,
	pub dob: Option<Date>,
	pub ssn_last4: Option<String>,
	pub match_mode: Option<String>,
}

#[cfg(test)]
mod tests {
	use time::macros::date;

	use super::*;

	fn row(first: &str, last: &str) -> RawCaseRow {
		RawCaseRow {
			first_name: Some(first.to_string()),
			last_name: Some(last.to_string()),
			..RawCaseRow::default()
		}
	}

	#[test]
	fn identity_key_ignores_case() {
		let upper = row("JOHN", "DOE");
		let lower = row("john", "doe");

		assert_eq!(IdentityKey::of(&upper), IdentityKey::of(&lower));
	}

	#[test]
	fn identity_key_collapses_none_and_empty() {
		let absent = row("John", "Doe");
		let empty = RawCaseRow {
			middle_name: Some(String::new()),
			suffix: Some(String::new()),
			..row("John", "Doe")
		};

		assert_eq!(IdentityKey::of(&absent), IdentityKey::of(&empty));
	}

	#[test]
	fn identity_key_separates_distinct_dobs() {
		let a = RawCaseRow { dob: Some(date!(1980 - 05 - 10)), ..row("John", "Doe") };
		let b = RawCaseRow { dob: Some(date!(1981 - 05 - 10)), ..row("John", "Doe") };

		assert_ne!(IdentityKey::of(&a), IdentityKey::of(&b));
	}

	#[test]
	fn driver_license_combines_state_and_number() {
		assert_eq!(
			combine_driver_license(Some("FL"), Some("ABC123456")),
			Some("FL-ABC123456".to_string())
		);
		assert_eq!(combine_driver_license(Some("FL"), None), Some("FL".to_string()));
		assert_eq!(
			combine_driver_license(None, Some("ABC123456")),
			Some("ABC123456".to_string())
		);
		assert_eq!(combine_driver_license(Some(" "), None), None);
		assert_eq!(combine_driver_license(None, None), None);
	}

	#[test]
	fn case_record_copies_case_fields_only() {
		let row = RawCaseRow {
			county: Some("Duval".to_string()),
			case_number: Some("2020-CF-001234".to_string()),
			file_date: Some(date!(2020 - 05 - 15)),
			..row("John", "Doe")
		};
		let case = CaseRecord::from_row(&row);

		assert_eq!(case.county.as_deref(), Some("Duval"));
		assert_eq!(case.case_number.as_deref(), Some("2020-CF-001234"));
		assert_eq!(case.file_date, Some(date!(2020 - 05 - 15)));
	}
}
