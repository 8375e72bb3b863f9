//! Snapshot policy and VM snapshot normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

/// Snapshot schedule interval, emitted by the API as a zero-based
/// positional code.
///
/// Code order (0=HOURLY, 1=DAILY, 2=WEEKLY, 3=MONTHLY) is part of the
/// `listSnapshotPolicies` response contract; the table is written out so a
/// reorder of this enum can never shift the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotInterval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl SnapshotInterval {
    pub fn from_code(field: &'static str, code: i64) -> Result<Self, NormalizeError> {
        match code {
            0 => Ok(SnapshotInterval::Hourly),
            1 => Ok(SnapshotInterval::Daily),
            2 => Ok(SnapshotInterval::Weekly),
            3 => Ok(SnapshotInterval::Monthly),
            other => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotPolicy {
    pub uuid: String,
    pub interval: SnapshotInterval,
    pub max_snaps: Option<i64>,
    pub schedule: Option<String>,
    pub timezone: Option<String>,
    pub volume: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl SnapshotPolicy {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let interval_code = fields::opt_i64(obj, "intervaltype")?
            .ok_or(NormalizeError::MissingRequiredField { field: "intervaltype" })?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            interval: SnapshotInterval::from_code("intervaltype", interval_code)?,
            max_snaps: fields::opt_i64(obj, "maxsnaps")?,
            schedule: fields::opt_str(obj, "schedule")?,
            timezone: fields::opt_str(obj, "timezone")?,
            volume: ParentRef::from_listing(fields::opt_str(obj, "volumeid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.volume.resolve(ParentKind::Volume, lookup)
    }
}

impl SyncRecord for SnapshotPolicy {
    const KIND: RecordKind = RecordKind::SnapshotPolicy;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Disk-only vs. disk-and-memory VM snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmSnapshotType {
    Disk,
    DiskAndMemory,
}

impl VmSnapshotType {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "DISK" => Ok(VmSnapshotType::Disk),
            "DISKANDMEMORY" => Ok(VmSnapshotType::DiskAndMemory),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// VM snapshot lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmSnapshotStatus {
    Allocated,
    Creating,
    Ready,
    Reverting,
    Expunging,
    Error,
}

impl VmSnapshotStatus {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ALLOCATED" => Ok(VmSnapshotStatus::Allocated),
            "CREATING" => Ok(VmSnapshotStatus::Creating),
            "READY" => Ok(VmSnapshotStatus::Ready),
            "REVERTING" => Ok(VmSnapshotStatus::Reverting),
            "EXPUNGING" => Ok(VmSnapshotStatus::Expunging),
            "ERROR" => Ok(VmSnapshotStatus::Error),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VmSnapshot {
    pub uuid: String,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub snapshot_type: Option<VmSnapshotType>,
    pub status: Option<VmSnapshotStatus>,
    pub current: Option<bool>,
    pub vm_instance: ParentRef,
    pub zone: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl VmSnapshot {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let snapshot_type = fields::opt_str(obj, "type")?
            .map(|raw| VmSnapshotType::parse("type", &raw))
            .transpose()?;
        let status = fields::opt_str(obj, "state")?
            .map(|raw| VmSnapshotStatus::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            display_name: fields::opt_str(obj, "displayname")?,
            description: fields::opt_str(obj, "description")?,
            snapshot_type,
            status,
            current: fields::opt_bool(obj, "current")?,
            vm_instance: ParentRef::from_listing(fields::opt_str(obj, "virtualmachineid")?),
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.vm_instance.resolve(ParentKind::VmInstance, lookup)?;
        self.zone.resolve(ParentKind::Zone, lookup)
    }
}

impl SyncRecord for VmSnapshot {
    const KIND: RecordKind = RecordKind::VmSnapshot;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_interval_code_order() {
        assert_eq!(
            SnapshotInterval::from_code("intervaltype", 0).unwrap(),
            SnapshotInterval::Hourly
        );
        assert_eq!(
            SnapshotInterval::from_code("intervaltype", 1).unwrap(),
            SnapshotInterval::Daily
        );
        assert_eq!(
            SnapshotInterval::from_code("intervaltype", 2).unwrap(),
            SnapshotInterval::Weekly
        );
        assert_eq!(
            SnapshotInterval::from_code("intervaltype", 3).unwrap(),
            SnapshotInterval::Monthly
        );
        assert!(SnapshotInterval::from_code("intervaltype", 4).is_err());
    }

    #[test]
    fn test_snapshot_policy_conversion() {
        let obj = json!({
            "id": "sp-1",
            "intervaltype": 1,
            "maxsnaps": 8,
            "schedule": "00:30",
            "timezone": "UTC",
            "volumeid": "vol-1"
        });

        let policy = SnapshotPolicy::from_listing(&obj).unwrap();
        assert_eq!(policy.uuid, "sp-1");
        assert_eq!(policy.interval, SnapshotInterval::Daily);
        assert_eq!(policy.max_snaps, Some(8));
        assert_eq!(policy.volume.pending_uuid(), Some("vol-1"));
    }

    #[test]
    fn test_snapshot_policy_requires_interval() {
        let obj = json!({"id": "sp-2"});
        assert_eq!(
            SnapshotPolicy::from_listing(&obj).unwrap_err(),
            NormalizeError::MissingRequiredField { field: "intervaltype" }
        );
    }

    #[test]
    fn test_vm_snapshot_conversion() {
        let obj = json!({
            "id": "vms-1",
            "name": "before-upgrade",
            "displayname": "Before upgrade",
            "type": "DiskAndMemory",
            "state": "Ready",
            "current": true,
            "virtualmachineid": "vm-7",
            "zoneid": "zone-1"
        });

        let snap = VmSnapshot::from_listing(&obj).unwrap();
        assert_eq!(snap.uuid, "vms-1");
        assert_eq!(snap.snapshot_type, Some(VmSnapshotType::DiskAndMemory));
        assert_eq!(snap.status, Some(VmSnapshotStatus::Ready));
        assert_eq!(snap.current, Some(true));
        assert_eq!(snap.vm_instance.pending_uuid(), Some("vm-7"));
    }
}
