//! ISO `YYYY-MM-DD` (de)serialization for `time::Date` fields, plus RFC 3339
//! for the envelope timestamp.

use serde::{Deserialize, Deserializer, Serializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	let formatted = value.format(&ISO_DATE).map_err(serde::ser::Error::custom)?;

	serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;

	Date::parse(&raw, &ISO_DATE).map_err(serde::de::Error::custom)
}

pub mod option {
	use super::*;

	pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(date) => super::serialize(date, serializer),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = Option::<String>::deserialize(deserializer)?;

		raw.filter(|raw| !raw.trim().is_empty())
			.map(|raw| Date::parse(&raw, &ISO_DATE).map_err(serde::de::Error::custom))
			.transpose()
	}
}

pub mod timestamp {
	use serde::{Deserialize, Deserializer, Serializer};
	use time::{OffsetDateTime, format_description::well_known::Rfc3339};

	pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;

		serializer.serialize_str(&formatted)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		OffsetDateTime::parse(&raw, &Rfc3339).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use serde::{Deserialize, Serialize};
	use time::{Date, macros::date};

	#[derive(Debug, PartialEq, Serialize, Deserialize)]
	struct Holder {
		#[serde(default, with = "super::option")]
		dob: Option<Date>,
	}

	#[test]
	fn round_trips_iso_dates() {
		let holder = Holder { dob: Some(date!(1980 - 05 - 10)) };
		let json = serde_json::to_string(&holder).expect("Serialize.");

		assert_eq!(json, r#"{"dob":"1980-05-10"}"#);
		assert_eq!(serde_json::from_str::<Holder>(&json).expect("Deserialize."), holder);
	}

	#[test]
	fn missing_and_empty_read_as_none() {
		assert_eq!(serde_json::from_str::<Holder>("{}").expect("Deserialize.").dob, None);
		assert_eq!(
			serde_json::from_str::<Holder>(r#"{"dob":""}"#).expect("Deserialize.").dob,
			None
		);
	}
}
