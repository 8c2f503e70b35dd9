use docket_domain::RawCaseRow;
use sqlx::{PgPool, Postgres, QueryBuilder, postgres::PgPoolOptions};

use crate::{
	Result,
	rows::{CaseRowRecord, RowQuery},
};

const SELECT_COLUMNS: &str = "\
SELECT first_name, middle_name, last_name, suffix, dob, sex, race, dl_state, dl_number,
	county, state, case_number, charge, charge_type, disposition_type, disposition_date,
	file_date, offense_date
FROM case_rows
WHERE TRUE";

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS case_rows (
	id BIGSERIAL PRIMARY KEY,
	first_name TEXT,
	middle_name TEXT,
	last_name TEXT,
	suffix TEXT,
	dob DATE,
	sex TEXT,
	race TEXT,
	dl_state TEXT,
	dl_number TEXT,
	ssn_last4 TEXT,
	county TEXT,
	state TEXT,
	case_number TEXT,
	charge TEXT,
	charge_type TEXT,
	disposition_type TEXT,
	disposition_date DATE,
	file_date DATE,
	offense_date DATE
);
CREATE INDEX IF NOT EXISTS idx_case_rows_last_name ON case_rows (upper(last_name));
CREATE INDEX IF NOT EXISTS idx_case_rows_dob ON case_rows (dob);
CREATE INDEX IF NOT EXISTS idx_case_rows_ssn_last4 ON case_rows (ssn_last4)";

pub struct Db {
	pub pool: PgPool,
}

impl Db {
	pub async fn connect(cfg: &docket_config::Postgres) -> Result<Self> {
		let pool =
			PgPoolOptions::new().max_connections(cfg.pool_max_conns).connect(&cfg.dsn).await?;

		Ok(Self { pool })
	}

	pub async fn ensure_schema(&self) -> Result<()> {
		let lock_id: i64 = 3_151_702;
		// Advisory locks are held per connection. Use a single transaction so
		// the lock is scoped to one connection and released when it ends.
		let mut tx = self.pool.begin().await?;

		sqlx::query("SELECT pg_advisory_xact_lock($1)").bind(lock_id).execute(&mut *tx).await?;

		for statement in SCHEMA.split(';') {
			let trimmed = statement.trim();

			if trimmed.is_empty() {
				continue;
			}

			sqlx::query(trimmed).execute(&mut *tx).await?;
		}

		tx.commit().await?;

		Ok(())
	}

	/// Fetches candidate rows with the query predicates already applied; the
	/// aggregation core trusts this filtering and never re-checks it.
	pub async fn search_rows(&self, query: &RowQuery) -> Result<Vec<RawCaseRow>> {
		let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);

		if let Some(first_name) = &query.first_name {
			builder.push(" AND upper(first_name) = upper(");
			builder.push_bind(first_name);
			builder.push(")");
		}
		if let Some(middle_name) = &query.middle_name {
			builder.push(" AND upper(middle_name) = upper(");
			builder.push_bind(middle_name);
			builder.push(")");
		}
		if let Some(last_name) = &query.last_name {
			builder.push(" AND upper(last_name) = upper(");
			builder.push_bind(last_name);
			builder.push(")");
		}
		if let Some(dob) = query.dob {
			builder.push(" AND dob = ");
			builder.push_bind(dob);
		}
		if let Some(ssn_last4) = &query.ssn_last4 {
			builder.push(" AND ssn_last4 = ");
			builder.push_bind(ssn_last4);
		}
		if let Some(filed_from) = query.filed_date_from {
			builder.push(" AND file_date >= ");
			builder.push_bind(filed_from);
		}
		if let Some(filed_to) = query.filed_date_to {
			builder.push(" AND file_date <= ");
			builder.push_bind(filed_to);
		}
		if !query.counties.is_empty() {
			builder.push(" AND county = ANY(");
			builder.push_bind(query.counties.clone());
			builder.push(")");
		}
		if !query.case_types.is_empty() {
			builder.push(" AND charge_type = ANY(");
			builder.push_bind(query.case_types.clone());
			builder.push(")");
		}

		builder.push(" ORDER BY upper(last_name), upper(first_name), file_date, case_number");
		builder.push(" OFFSET ");
		builder.push_bind(query.offset);
		builder.push(" LIMIT ");
		builder.push_bind(query.limit);

		let records: Vec<CaseRowRecord> =
			builder.build_query_as().fetch_all(&self.pool).await?;

		tracing::debug!(rows = records.len(), "Fetched candidate case rows.");

		Ok(records.into_iter().map(RawCaseRow::from).collect())
	}
}
