pub mod db;
pub mod rows;

mod error;

pub use db::Db;
pub use error::{Error, Result};
pub use rows::RowQuery;
