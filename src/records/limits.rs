//! Department and project resource limit normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

/// Limitable resource kinds, emitted by `listResourceLimits` as zero-based
/// positional codes.
///
/// Code order (0=Instance .. 11=SecondaryStorage) is part of the API
/// contract; `from_code`/`code` spell the table out in both directions so
/// a reorder of this enum can never shift the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Instance,
    Ip,
    Volume,
    Snapshot,
    Template,
    Project,
    Network,
    Vpc,
    Cpu,
    Memory,
    PrimaryStorage,
    SecondaryStorage,
}

impl ResourceType {
    pub fn from_code(field: &'static str, code: i64) -> Result<Self, NormalizeError> {
        match code {
            0 => Ok(ResourceType::Instance),
            1 => Ok(ResourceType::Ip),
            2 => Ok(ResourceType::Volume),
            3 => Ok(ResourceType::Snapshot),
            4 => Ok(ResourceType::Template),
            5 => Ok(ResourceType::Project),
            6 => Ok(ResourceType::Network),
            7 => Ok(ResourceType::Vpc),
            8 => Ok(ResourceType::Cpu),
            9 => Ok(ResourceType::Memory),
            10 => Ok(ResourceType::PrimaryStorage),
            11 => Ok(ResourceType::SecondaryStorage),
            other => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: other.to_string(),
            }),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            ResourceType::Instance => 0,
            ResourceType::Ip => 1,
            ResourceType::Volume => 2,
            ResourceType::Snapshot => 3,
            ResourceType::Template => 4,
            ResourceType::Project => 5,
            ResourceType::Network => 6,
            ResourceType::Vpc => 7,
            ResourceType::Cpu => 8,
            ResourceType::Memory => 9,
            ResourceType::PrimaryStorage => 10,
            ResourceType::SecondaryStorage => 11,
        }
    }
}

/// Per-department (account) cap on one resource kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceLimitDepartment {
    pub uuid: String,
    pub resource_type: ResourceType,
    /// -1 in the listing means unlimited; kept as-is.
    pub max: Option<i64>,
    /// Department (account) name as listed.
    pub department_name: Option<String>,
    pub department: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl ResourceLimitDepartment {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let code = fields::opt_i64(obj, "resourcetype")?
            .ok_or(NormalizeError::MissingRequiredField { field: "resourcetype" })?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            resource_type: ResourceType::from_code("resourcetype", code)?,
            max: fields::opt_i64(obj, "max")?,
            department_name: fields::opt_str(obj, "account")?,
            department: ParentRef::from_listing(fields::opt_str(obj, "accountid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.department.resolve(ParentKind::Department, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for ResourceLimitDepartment {
    const KIND: RecordKind = RecordKind::ResourceLimitDepartment;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Per-project cap on one resource kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceLimitProject {
    pub uuid: String,
    pub resource_type: ResourceType,
    /// -1 in the listing means unlimited; kept as-is.
    pub max: Option<i64>,
    pub project: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl ResourceLimitProject {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let code = fields::opt_i64(obj, "resourcetype")?
            .ok_or(NormalizeError::MissingRequiredField { field: "resourcetype" })?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            resource_type: ResourceType::from_code("resourcetype", code)?,
            max: fields::opt_i64(obj, "max")?,
            project: ParentRef::from_listing(fields::opt_str(obj, "projectid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.project.resolve(ParentKind::Project, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for ResourceLimitProject {
    const KIND: RecordKind = RecordKind::ResourceLimitProject;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
