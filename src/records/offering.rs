//! Compute and storage (disk) offering normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::vocab::{ProvisioningType, StorageType};
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

/// Service offering for VM instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeOffering {
    pub uuid: String,
    pub name: Option<String>,
    pub display_text: Option<String>,
    pub cpu_number: Option<i64>,
    /// MHz per core.
    pub cpu_speed: Option<i64>,
    /// MiB of RAM.
    pub memory: Option<i64>,
    pub is_customized: Option<bool>,
    pub offer_ha: Option<bool>,
    pub limit_cpu_use: Option<bool>,
    pub storage_type: Option<StorageType>,
    pub tags: Option<String>,
    pub host_tags: Option<String>,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl ComputeOffering {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let storage_type = fields::opt_str(obj, "storagetype")?
            .map(|raw| StorageType::parse("storagetype", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            display_text: fields::opt_str(obj, "displaytext")?,
            cpu_number: fields::opt_i64(obj, "cpunumber")?,
            cpu_speed: fields::opt_i64(obj, "cpuspeed")?,
            memory: fields::opt_i64(obj, "memory")?,
            is_customized: fields::opt_bool(obj, "iscustomized")?,
            offer_ha: fields::opt_bool(obj, "offerha")?,
            limit_cpu_use: fields::opt_bool(obj, "limitcpuuse")?,
            storage_type,
            tags: fields::opt_str(obj, "tags")?,
            host_tags: fields::opt_str(obj, "hosttags")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for ComputeOffering {
    const KIND: RecordKind = RecordKind::ComputeOffering;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Disk offering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageOffering {
    pub uuid: String,
    pub name: Option<String>,
    pub display_text: Option<String>,
    /// GiB. Defaults to 0 when the listing omits it (customized offerings
    /// carry no fixed size); the only numeric field with a fallback.
    pub disk_size: i64,
    pub is_customized: Option<bool>,
    pub storage_type: Option<StorageType>,
    pub provisioning_type: Option<ProvisioningType>,
    pub tags: Option<String>,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl StorageOffering {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let storage_type = fields::opt_str(obj, "storagetype")?
            .map(|raw| StorageType::parse("storagetype", &raw))
            .transpose()?;
        let provisioning_type = fields::opt_str(obj, "provisioningtype")?
            .map(|raw| ProvisioningType::parse("provisioningtype", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            display_text: fields::opt_str(obj, "displaytext")?,
            disk_size: fields::opt_i64(obj, "disksize")?.unwrap_or(0),
            is_customized: fields::opt_bool(obj, "iscustomized")?,
            storage_type,
            provisioning_type,
            tags: fields::opt_str(obj, "tags")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for StorageOffering {
    const KIND: RecordKind = RecordKind::StorageOffering;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
