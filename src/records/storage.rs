//! Volume, primary storage and secondary storage normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::vocab::{ProvisioningType, StorageType};
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

/// Disk role of a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeType {
    Root,
    DataDisk,
}

impl VolumeType {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ROOT" => Ok(VolumeType::Root),
            "DATADISK" => Ok(VolumeType::DataDisk),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Volume lifecycle state as the listing reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeStatus {
    Allocated,
    Creating,
    Ready,
    Destroy,
    Destroyed,
    Expunging,
    Expunged,
    Migrating,
    Uploading,
    Uploaded,
    UploadError,
    UploadAbandoned,
}

impl VolumeStatus {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ALLOCATED" => Ok(VolumeStatus::Allocated),
            "CREATING" => Ok(VolumeStatus::Creating),
            "READY" => Ok(VolumeStatus::Ready),
            "DESTROY" => Ok(VolumeStatus::Destroy),
            "DESTROYED" => Ok(VolumeStatus::Destroyed),
            "EXPUNGING" => Ok(VolumeStatus::Expunging),
            "EXPUNGED" => Ok(VolumeStatus::Expunged),
            "MIGRATING" => Ok(VolumeStatus::Migrating),
            "UPLOADING" => Ok(VolumeStatus::Uploading),
            "UPLOADED" => Ok(VolumeStatus::Uploaded),
            "UPLOADERROR" => Ok(VolumeStatus::UploadError),
            "UPLOADABANDONED" => Ok(VolumeStatus::UploadAbandoned),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volume {
    pub uuid: String,
    pub name: Option<String>,
    pub volume_type: Option<VolumeType>,
    pub status: Option<VolumeStatus>,
    /// Bytes.
    pub size: Option<i64>,
    pub storage_type: Option<StorageType>,
    pub provisioning_type: Option<ProvisioningType>,
    pub zone: ParentRef,
    pub domain: ParentRef,
    pub vm_instance: ParentRef,
    pub disk_offering: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl Volume {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let volume_type = fields::opt_str(obj, "type")?
            .map(|raw| VolumeType::parse("type", &raw))
            .transpose()?;
        let status = fields::opt_str(obj, "state")?
            .map(|raw| VolumeStatus::parse("state", &raw))
            .transpose()?;
        let storage_type = fields::opt_str(obj, "storagetype")?
            .map(|raw| StorageType::parse("storagetype", &raw))
            .transpose()?;
        let provisioning_type = fields::opt_str(obj, "provisioningtype")?
            .map(|raw| ProvisioningType::parse("provisioningtype", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            volume_type,
            status,
            size: fields::opt_i64(obj, "size")?,
            storage_type,
            provisioning_type,
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            vm_instance: ParentRef::from_listing(fields::opt_str(obj, "virtualmachineid")?),
            disk_offering: ParentRef::from_listing(fields::opt_str(obj, "diskofferingid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)?;
        self.vm_instance.resolve(ParentKind::VmInstance, lookup)?;
        self.disk_offering.resolve(ParentKind::DiskOffering, lookup)
    }
}

impl SyncRecord for Volume {
    const KIND: RecordKind = RecordKind::Volume;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Primary storage pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryStorage {
    pub uuid: String,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub path: Option<String>,
    /// Pool type token (NetworkFilesystem, SharedMountPoint, ...);
    /// hypervisor-owned vocabulary, passed through.
    pub pool_type: Option<String>,
    pub scope: Option<String>,
    pub hypervisor: Option<String>,
    /// Bytes.
    pub disk_size_total: Option<i64>,
    /// Bytes.
    pub disk_size_used: Option<i64>,
    pub state: Option<String>,
    pub zone: ParentRef,
    pub pod: ParentRef,
    pub cluster: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl PrimaryStorage {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            ip_address: fields::opt_str(obj, "ipaddress")?,
            path: fields::opt_str(obj, "path")?,
            pool_type: fields::opt_str(obj, "type")?,
            scope: fields::opt_str(obj, "scope")?,
            hypervisor: fields::opt_str(obj, "hypervisor")?,
            disk_size_total: fields::opt_i64(obj, "disksizetotal")?,
            disk_size_used: fields::opt_i64(obj, "disksizeused")?,
            state: fields::opt_str(obj, "state")?,
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            pod: ParentRef::from_listing(fields::opt_str(obj, "podid")?),
            cluster: ParentRef::from_listing(fields::opt_str(obj, "clusterid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.pod.resolve(ParentKind::Pod, lookup)?;
        self.cluster.resolve(ParentKind::Cluster, lookup)
    }
}

impl SyncRecord for PrimaryStorage {
    const KIND: RecordKind = RecordKind::PrimaryStorage;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Secondary storage (image store).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryStorage {
    pub uuid: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub provider_name: Option<String>,
    pub scope: Option<String>,
    pub zone: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl SecondaryStorage {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            url: fields::opt_str(obj, "url")?,
            protocol: fields::opt_str(obj, "protocol")?,
            provider_name: fields::opt_str(obj, "providername")?,
            scope: fields::opt_str(obj, "scope")?,
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.zone.resolve(ParentKind::Zone, lookup)
    }
}

impl SyncRecord for SecondaryStorage {
    const KIND: RecordKind = RecordKind::SecondaryStorage;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_conversion() {
        let obj = json!({
            "id": "vol-1",
            "name": "ROOT-42",
            "type": "ROOT",
            "state": "Ready",
            "size": 21_474_836_480_i64,
            "storagetype": "shared",
            "zoneid": "zone-1",
            "virtualmachineid": "vm-7",
            "diskofferingid": "so-1"
        });

        let volume = Volume::from_listing(&obj).unwrap();
        assert_eq!(volume.uuid, "vol-1");
        assert_eq!(volume.volume_type, Some(VolumeType::Root));
        assert_eq!(volume.status, Some(VolumeStatus::Ready));
        assert_eq!(volume.size, Some(21_474_836_480));
        assert_eq!(volume.vm_instance.pending_uuid(), Some("vm-7"));
        assert_eq!(volume.disk_offering.pending_uuid(), Some("so-1"));
    }

    #[test]
    fn test_volume_absent_size_stays_unset() {
        let obj = json!({"id": "vol-2", "type": "DATADISK"});
        let volume = Volume::from_listing(&obj).unwrap();
        assert_eq!(volume.size, None);
        assert_eq!(volume.volume_type, Some(VolumeType::DataDisk));
    }

    #[test]
    fn test_volume_unknown_state_rejected() {
        let obj = json!({"id": "vol-3", "state": "Snoozing"});
        assert!(matches!(
            Volume::from_listing(&obj).unwrap_err(),
            NormalizeError::UnrecognizedEnumValue { field: "state", .. }
        ));
    }

    #[test]
    fn test_primary_storage_conversion() {
        let obj = json!({
            "id": "ps-1",
            "name": "pool-a",
            "ipaddress": "192.168.10.4",
            "path": "/export/primary",
            "type": "NetworkFilesystem",
            "disksizetotal": 1_099_511_627_776_i64,
            "disksizeused": 137_438_953_472_i64,
            "zoneid": "zone-1",
            "podid": "pod-1",
            "clusterid": "cl-1"
        });

        let pool = PrimaryStorage::from_listing(&obj).unwrap();
        assert_eq!(pool.uuid, "ps-1");
        assert_eq!(pool.disk_size_total, Some(1_099_511_627_776));
        assert_eq!(pool.pod.pending_uuid(), Some("pod-1"));
        assert_eq!(pool.cluster.pending_uuid(), Some("cl-1"));
    }

    #[test]
    fn test_secondary_storage_conversion() {
        let obj = json!({
            "id": "ss-1",
            "name": "nfs://sec",
            "url": "nfs://192.168.10.5/export/secondary",
            "protocol": "nfs",
            "providername": "NFS",
            "scope": "ZONE",
            "zoneid": "zone-1"
        });

        let store = SecondaryStorage::from_listing(&obj).unwrap();
        assert_eq!(store.uuid, "ss-1");
        assert_eq!(store.provider_name.as_deref(), Some("NFS"));
        assert_eq!(store.zone.pending_uuid(), Some("zone-1"));
    }
}
