use docket_domain::RawCaseRow;
use time::Date;

/// Predicates the row store applies before the core ever sees a row. The
/// service builds this from the validated request; the core never re-filters
/// by these fields.
#[derive(Debug, Clone, Default)]
pub struct RowQuery {
	pub first_name: Option<String>,
	pub middle_name: Option<String>,
	pub last_name: Option<String>,
	pub dob: Option<Date>,
	pub ssn_last4: Option<String>,
	pub filed_date_from: Option<Date>,
	pub filed_date_to: Option<Date>,
	pub counties: Vec<String>,
	pub case_types: Vec<String>,
	pub offset: i64,
	pub limit: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CaseRowRecord {
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

impl From<CaseRowRecord> for RawCaseRow {
	fn from(record: CaseRowRecord) -> Self {
		Self {
			first_name: record.first_name,
			middle_name: record.middle_name,
			last_name: record.last_name,
			suffix: record.suffix,
			dob: record.dob,
			sex: record.sex,
			race: record.race,
			dl_state: record.dl_state,
			dl_number: record.dl_number,
			county: record.county,
			state: record.state,
			case_number: record.case_number,
			charge: record.charge,
			charge_type: record.charge_type,
			disposition_type: record.disposition_type,
			disposition_date: record.disposition_date,
			file_date: record.file_date,
			offense_date: record.offense_date,
		}
	}
}
