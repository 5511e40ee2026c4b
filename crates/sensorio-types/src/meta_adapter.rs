//! Adapter that stores the entity hierarchy: projects, modules, devices, and
//! sensor readings.
//!
//! All reads that take a `user_id` are ownership-scoped: a row that exists
//! but belongs to another user is reported as the entity-kind "not found"
//! error, indistinguishable from a missing row. Child-id lists on parents
//! (`Project::modules`, `Module::devices`) are derived from the children's
//! forward references at read time, so they can never diverge from reality.

use async_trait::async_trait;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::{
	prelude::*,
	schema::{DataType, DeviceType},
	types::serialize_timestamp_iso,
};

// Entities //
//**********//

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	#[serde(rename = "id")]
	pub project_id: Box<str>,
	pub user_id: Box<str>,
	pub name: Box<str>,
	pub description: Option<Box<str>>,
	/// Derived: ids of the modules currently referencing this project
	pub modules: Box<[Box<str>]>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub updated_at: Timestamp,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
	#[serde(rename = "id")]
	pub module_id: Box<str>,
	pub user_id: Box<str>,
	pub project_id: Box<str>,
	pub name: Box<str>,
	pub description: Option<Box<str>>,
	/// Derived: ids of the devices currently referencing this module
	pub devices: Box<[Box<str>]>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub updated_at: Timestamp,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
	#[serde(rename = "id")]
	pub device_id: Box<str>,
	pub user_id: Box<str>,
	pub module_id: Box<str>,
	pub name: Box<str>,
	pub description: Option<Box<str>>,
	pub device_type: DeviceType,
	pub data_types: Box<[DataType]>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
	#[serde(rename = "id")]
	pub reading_id: Box<str>,
	pub user_id: Box<str>,
	pub device_id: Box<str>,
	pub data_type: DataType,
	pub value: serde_json::Value,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
}

// Operation payloads //
//********************//

#[derive(Debug)]
pub struct CreateProjectData<'a> {
	pub user_id: &'a str,
	pub name: &'a str,
	pub description: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct UpdateProjectData {
	pub name: Patch<Box<str>>,
	pub description: Patch<Box<str>>,
}

#[derive(Debug)]
pub struct CreateModuleData<'a> {
	pub user_id: &'a str,
	pub project_id: &'a str,
	pub name: &'a str,
	pub description: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct UpdateModuleData {
	pub name: Patch<Box<str>>,
	pub description: Patch<Box<str>>,
}

#[derive(Debug)]
pub struct CreateDeviceData<'a> {
	pub user_id: &'a str,
	pub module_id: &'a str,
	pub name: &'a str,
	pub description: Option<&'a str>,
	pub device_type: DeviceType,
	pub data_types: &'a [DataType],
}

#[derive(Debug)]
pub struct CreateReadingData<'a> {
	pub user_id: &'a str,
	pub device_id: &'a str,
	pub data_type: DataType,
	pub value: &'a serde_json::Value,
}

/// Day-granularity filters for listing readings. `date` takes precedence
/// over the range pair when both are present.
#[derive(Debug, Default)]
pub struct ReadingFilter {
	pub date: Option<chrono::NaiveDate>,
	pub start_date: Option<chrono::NaiveDate>,
	pub end_date: Option<chrono::NaiveDate>,
}

// Adapter trait //
//***************//

/// A Sensorio meta adapter
///
/// Every `MetaAdapter` implementation is required to implement this trait.
/// A `MetaAdapter` is responsible for storing the entity hierarchy and for
/// the batch deletions the cascade engine is built from. Batch deletes are
/// atomic at "delete all matching" granularity, not per record.
#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	// Projects
	async fn create_project(&self, data: CreateProjectData<'_>) -> SnResult<Project>;
	async fn read_project(&self, user_id: &str, project_id: &str) -> SnResult<Project>;
	async fn list_projects(&self, user_id: &str) -> SnResult<Vec<Project>>;
	async fn update_project(
		&self,
		user_id: &str,
		project_id: &str,
		data: &UpdateProjectData,
	) -> SnResult<()>;
	async fn delete_project(&self, project_id: &str) -> SnResult<()>;
	async fn project_exists(&self, project_id: &str) -> SnResult<bool>;
	async fn delete_projects_by_user(&self, user_id: &str) -> SnResult<u64>;

	// Modules
	async fn create_module(&self, data: CreateModuleData<'_>) -> SnResult<Module>;
	async fn read_module(&self, user_id: &str, module_id: &str) -> SnResult<Module>;
	async fn list_modules(&self, user_id: &str, project_id: &str) -> SnResult<Vec<Module>>;
	async fn update_module(
		&self,
		user_id: &str,
		module_id: &str,
		data: &UpdateModuleData,
	) -> SnResult<()>;
	async fn delete_modules(&self, module_ids: &[Box<str>]) -> SnResult<u64>;
	async fn module_exists(&self, module_id: &str) -> SnResult<bool>;
	async fn list_module_ids(&self, project_id: &str) -> SnResult<Vec<Box<str>>>;
	async fn delete_modules_by_user(&self, user_id: &str) -> SnResult<u64>;

	// Devices
	async fn create_device(&self, data: CreateDeviceData<'_>) -> SnResult<Device>;
	async fn read_device(&self, user_id: &str, device_id: &str) -> SnResult<Device>;
	async fn list_devices(&self, user_id: &str, module_id: &str) -> SnResult<Vec<Device>>;
	async fn delete_device(&self, device_id: &str) -> SnResult<()>;
	async fn device_exists(&self, device_id: &str) -> SnResult<bool>;
	async fn list_device_ids(&self, module_id: &str) -> SnResult<Vec<Box<str>>>;
	async fn list_device_ids_by_modules(
		&self,
		module_ids: &[Box<str>],
	) -> SnResult<Vec<Box<str>>>;
	async fn delete_devices_by_modules(&self, module_ids: &[Box<str>]) -> SnResult<u64>;
	async fn delete_devices_by_user(&self, user_id: &str) -> SnResult<u64>;

	// Sensor readings
	async fn create_reading(&self, data: CreateReadingData<'_>) -> SnResult<SensorReading>;
	async fn list_readings(
		&self,
		device_id: &str,
		filter: &ReadingFilter,
	) -> SnResult<Vec<SensorReading>>;
	async fn delete_readings_by_devices(&self, device_ids: &[Box<str>]) -> SnResult<u64>;
	async fn delete_readings_by_user(&self, user_id: &str) -> SnResult<u64>;
}

// vim: ts=4
