//! Common types used throughout the backend.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
/// Unix timestamp in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(i64::try_from(res.as_secs()).unwrap_or(i64::MAX))
	}

	pub fn from_now(delta: i64) -> Timestamp {
		Timestamp(Self::now().0.saturating_add(delta))
	}

	pub fn add_seconds(&self, delta: i64) -> Timestamp {
		Timestamp(self.0.saturating_add(delta))
	}

	/// RFC 3339 rendering (UTC), or the raw number if out of range.
	pub fn to_iso_string(&self) -> String {
		chrono::DateTime::from_timestamp(self.0, 0)
			.map_or_else(|| self.0.to_string(), |dt| dt.to_rfc3339())
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

/// Serialize a timestamp as an ISO 8601 string for API responses
pub fn serialize_timestamp_iso<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	serializer.serialize_str(&ts.to_iso_string())
}


// vim: ts=4
