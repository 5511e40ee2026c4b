//! Boundary validation of payload fields. Runs in the mutation services,
//! before anything reaches the store.

use sensorio_types::schema::DataType;

use crate::prelude::*;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_USERNAME_LEN: usize = 30;
/// bcrypt ignores everything past 72 bytes
pub const MAX_PASSWORD_LEN: usize = 72;

pub fn name(value: &str) -> SnResult<()> {
	if value.is_empty() || value.chars().count() > MAX_NAME_LEN {
		return Err(Error::ValidationError(format!(
			"name must be 1-{} characters",
			MAX_NAME_LEN
		)));
	}
	Ok(())
}

pub fn description(value: Option<&str>) -> SnResult<()> {
	if let Some(value) = value {
		if value.chars().count() > MAX_DESCRIPTION_LEN {
			return Err(Error::ValidationError(format!(
				"description must be at most {} characters",
				MAX_DESCRIPTION_LEN
			)));
		}
	}
	Ok(())
}

pub fn username(value: &str) -> SnResult<()> {
	if value.is_empty() || value.chars().count() > MAX_USERNAME_LEN {
		return Err(Error::ValidationError(format!(
			"username must be 1-{} characters",
			MAX_USERNAME_LEN
		)));
	}
	Ok(())
}

pub fn email(value: &str) -> SnResult<()> {
	let well_formed = value
		.split_once('@')
		.is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
	if !well_formed {
		return Err(Error::ValidationError("invalid email address".into()));
	}
	Ok(())
}

pub fn password(value: &str) -> SnResult<()> {
	if value.is_empty() || value.len() > MAX_PASSWORD_LEN {
		return Err(Error::ValidationError(format!(
			"password must be 1-{} bytes",
			MAX_PASSWORD_LEN
		)));
	}
	Ok(())
}

/// Each declared data type must satisfy the unit compatibility table.
pub fn data_types(values: &[DataType]) -> SnResult<()> {
	for data_type in values {
		data_type.validate()?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use sensorio_types::schema::{MeasurementType, MeasurementUnit};

	#[test]
	fn test_name_bounds() {
		assert!(name("living room").is_ok());
		assert!(name("").is_err());
		assert!(name(&"x".repeat(MAX_NAME_LEN)).is_ok());
		assert!(name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
	}

	#[test]
	fn test_description_is_optional() {
		assert!(description(None).is_ok());
		assert!(description(Some("")).is_ok());
		assert!(description(Some(&"x".repeat(MAX_DESCRIPTION_LEN + 1))).is_err());
	}

	#[test]
	fn test_email_shape() {
		assert!(email("alice@example.com").is_ok());
		assert!(email("alice").is_err());
		assert!(email("@example.com").is_err());
		assert!(email("alice@localhost").is_err());
	}

	#[test]
	fn test_data_types_table() {
		let ok = DataType {
			measurement_type: MeasurementType::Temperature,
			measurement_unit: MeasurementUnit::Celsius,
		};
		let bad = DataType {
			measurement_type: MeasurementType::Temperature,
			measurement_unit: MeasurementUnit::Pascal,
		};
		assert!(data_types(&[ok]).is_ok());
		assert!(data_types(&[ok, bad]).is_err());
		assert!(data_types(&[]).is_ok());
	}
}

// vim: ts=4
