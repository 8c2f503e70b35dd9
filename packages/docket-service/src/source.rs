use docket_domain::RawCaseRow;
use docket_storage::{Db, RowQuery};

use crate::{BoxFuture, Error};

/// Supplies candidate rows for a validated query. The store is the production
/// implementation; tests substitute in-memory sources.
pub trait RowSource
where
	Self: Send + Sync,
{
	fn fetch_rows<'a>(
		&'a self,
		query: &'a RowQuery,
	) -> BoxFuture<'a, Result<Vec<RawCaseRow>, Error>>;
}

impl RowSource for Db {
	fn fetch_rows<'a>(
		&'a self,
		query: &'a RowQuery,
	) -> BoxFuture<'a, Result<Vec<RawCaseRow>, Error>> {
		Box::pin(async move { self.search_rows(query).await.map_err(Error::from) })
	}
}
