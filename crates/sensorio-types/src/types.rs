//! Core primitive types: timestamps and tri-state patch fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Timestamp //
//***********//

/// Unix timestamp in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Self {
		match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
			Ok(dur) => Self(dur.as_secs() as i64),
			Err(_) => Self(0),
		}
	}

	pub fn from_now(secs: i64) -> Self {
		Self(Self::now().0 + secs)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Serialize a [`Timestamp`] as an ISO-8601 string (falls back to the raw
/// value when out of chrono's range).
pub fn serialize_timestamp_iso<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	match chrono::DateTime::from_timestamp(ts.0, 0) {
		Some(dt) => serializer
			.serialize_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
		None => serializer.serialize_i64(ts.0),
	}
}

// Patch //
//*******//

/// A tri-state field for partial updates.
///
/// Distinguishes "field absent from the payload" (`Undefined`) from "field
/// explicitly set to null" (`Null`) from "field set to a value" (`Value`).
/// Use with `#[serde(default)]` so missing fields deserialize to `Undefined`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
	Undefined,
	Null,
	Value(T),
}

impl<T> Default for Patch<T> {
	fn default() -> Self {
		Patch::Undefined
	}
}

impl<T> Patch<T> {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Patch::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Patch::Null)
	}

	pub fn is_value(&self) -> bool {
		matches!(self, Patch::Value(_))
	}

	pub fn value(&self) -> Option<&T> {
		match self {
			Patch::Value(v) => Some(v),
			_ => None,
		}
	}

	/// `None` for `Undefined`, `Some(None)` for `Null`, `Some(Some(v))` for a value.
	pub fn as_option(&self) -> Option<Option<&T>> {
		match self {
			Patch::Undefined => None,
			Patch::Null => Some(None),
			Patch::Value(v) => Some(Some(v)),
		}
	}

	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
		match self {
			Patch::Undefined => Patch::Undefined,
			Patch::Null => Patch::Null,
			Patch::Value(v) => Patch::Value(f(v)),
		}
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match Option::<T>::deserialize(deserializer)? {
			Some(v) => Patch::Value(v),
			None => Patch::Null,
		})
	}
}

impl<T: Serialize> Serialize for Patch<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Patch::Value(v) => serializer.serialize_some(v),
			_ => serializer.serialize_none(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Deserialize, PartialEq)]
	struct TestStruct {
		#[serde(default)]
		name: Patch<String>,
		#[serde(default)]
		age: Patch<u32>,
	}

	#[test]
	fn test_patch_undefined() {
		let parsed: TestStruct = serde_json::from_str(r#"{"age": 25}"#).unwrap();
		assert!(parsed.name.is_undefined());
		assert_eq!(parsed.age.value(), Some(&25));
	}

	#[test]
	fn test_patch_null() {
		let parsed: TestStruct = serde_json::from_str(r#"{"name": null}"#).unwrap();
		assert!(parsed.name.is_null());
		assert!(parsed.age.is_undefined());
	}

	#[test]
	fn test_patch_value() {
		let parsed: TestStruct = serde_json::from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
		assert_eq!(parsed.name.value(), Some(&"Alice".to_string()));
		assert_eq!(parsed.age.value(), Some(&30));
	}

	#[test]
	fn test_patch_as_option() {
		let undefined: Patch<i32> = Patch::Undefined;
		let null: Patch<i32> = Patch::Null;
		let value: Patch<i32> = Patch::Value(42);

		assert_eq!(undefined.as_option(), None);
		assert_eq!(null.as_option(), Some(None));
		assert_eq!(value.as_option(), Some(Some(&42)));
	}

	#[test]
	fn test_patch_map() {
		let value: Patch<i32> = Patch::Value(10);
		assert_eq!(value.map(|v| v * 2), Patch::Value(20));
		let null: Patch<i32> = Patch::Null;
		assert_eq!(null.map(|v| v * 2), Patch::Null);
	}

	#[test]
	fn test_timestamp_ordering() {
		let earlier = Timestamp(100);
		let later = Timestamp::from_now(60);
		assert!(earlier < later);
	}
}

// vim: ts=4
