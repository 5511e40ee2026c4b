//! Measurement schema: device kinds, measurement types/units, and the fixed
//! unit compatibility table that device data types are validated against.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
	Sensor,
	Actuator,
}

impl std::fmt::Display for DeviceType {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			DeviceType::Sensor => write!(f, "sensor"),
			DeviceType::Actuator => write!(f, "actuator"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
	Temperature,
	Velocity,
	Acceleration,
	Time,
	Pressure,
	Mass,
	Luminosity,
	Humidity,
	Voltage,
}

impl std::fmt::Display for MeasurementType {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let name = match self {
			MeasurementType::Temperature => "temperature",
			MeasurementType::Velocity => "velocity",
			MeasurementType::Acceleration => "acceleration",
			MeasurementType::Time => "time",
			MeasurementType::Pressure => "pressure",
			MeasurementType::Mass => "mass",
			MeasurementType::Luminosity => "luminosity",
			MeasurementType::Humidity => "humidity",
			MeasurementType::Voltage => "voltage",
		};
		write!(f, "{}", name)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
	Celsius,
	Fahrenheit,
	Kelvin,
	#[serde(rename = "m/s")]
	MetersPerSecond,
	#[serde(rename = "km/h")]
	KilometersPerHour,
	#[serde(rename = "m/s²")]
	MetersPerSecondSquared,
	Second,
	Minute,
	Hour,
	Pascal,
	Bar,
	Kilogram,
	Gram,
	Volt,
	Millivolt,
}

impl std::fmt::Display for MeasurementUnit {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let name = match self {
			MeasurementUnit::Celsius => "celsius",
			MeasurementUnit::Fahrenheit => "fahrenheit",
			MeasurementUnit::Kelvin => "kelvin",
			MeasurementUnit::MetersPerSecond => "m/s",
			MeasurementUnit::KilometersPerHour => "km/h",
			MeasurementUnit::MetersPerSecondSquared => "m/s²",
			MeasurementUnit::Second => "second",
			MeasurementUnit::Minute => "minute",
			MeasurementUnit::Hour => "hour",
			MeasurementUnit::Pascal => "pascal",
			MeasurementUnit::Bar => "bar",
			MeasurementUnit::Kilogram => "kilogram",
			MeasurementUnit::Gram => "gram",
			MeasurementUnit::Volt => "volt",
			MeasurementUnit::Millivolt => "millivolt",
		};
		write!(f, "{}", name)
	}
}

impl MeasurementType {
	/// Units accepted for this measurement type. Types without a row in the
	/// compatibility table accept no unit at all.
	pub fn valid_units(self) -> &'static [MeasurementUnit] {
		use MeasurementUnit::*;
		match self {
			MeasurementType::Temperature => &[Celsius, Fahrenheit, Kelvin],
			MeasurementType::Velocity => &[MetersPerSecond, KilometersPerHour],
			MeasurementType::Acceleration => &[MetersPerSecondSquared],
			MeasurementType::Time => &[Second, Minute, Hour],
			MeasurementType::Pressure => &[Pascal, Bar],
			MeasurementType::Mass => &[Kilogram, Gram],
			MeasurementType::Voltage => &[Volt, Millivolt],
			MeasurementType::Luminosity | MeasurementType::Humidity => &[],
		}
	}
}

/// A (measurement type, measurement unit) pair declared valid for a device
/// and required on each of its readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataType {
	pub measurement_type: MeasurementType,
	pub measurement_unit: MeasurementUnit,
}

impl DataType {
	/// Ensures the unit belongs to the measurement type.
	pub fn validate(&self) -> SnResult<()> {
		if self.measurement_type.valid_units().contains(&self.measurement_unit) {
			Ok(())
		} else {
			Err(Error::ValidationError(format!(
				"invalid unit '{}' for measurement type '{}'",
				self.measurement_unit, self.measurement_type
			)))
		}
	}
}


// vim: ts=4
