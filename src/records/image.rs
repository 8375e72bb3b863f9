//! Template and ISO normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub uuid: String,
    pub name: Option<String>,
    pub display_text: Option<String>,
    /// Bytes.
    pub size: Option<i64>,
    /// Image format token (QCOW2, VHD, OVA, ...). Hypervisor-owned
    /// vocabulary, passed through.
    pub format: Option<String>,
    pub hypervisor: Option<String>,
    pub template_type: Option<String>,
    pub is_ready: Option<bool>,
    pub is_public: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_extractable: Option<bool>,
    pub password_enabled: Option<bool>,
    pub is_dynamically_scalable: Option<bool>,
    pub os_type: ParentRef,
    pub zone: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl Template {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            display_text: fields::opt_str(obj, "displaytext")?,
            size: fields::opt_i64(obj, "size")?,
            format: fields::opt_str(obj, "format")?,
            hypervisor: fields::opt_str(obj, "hypervisor")?,
            template_type: fields::opt_str(obj, "templatetype")?,
            is_ready: fields::opt_bool(obj, "isready")?,
            is_public: fields::opt_bool(obj, "ispublic")?,
            is_featured: fields::opt_bool(obj, "isfeatured")?,
            is_extractable: fields::opt_bool(obj, "isextractable")?,
            password_enabled: fields::opt_bool(obj, "passwordenabled")?,
            is_dynamically_scalable: fields::opt_bool(obj, "isdynamicallyscalable")?,
            os_type: ParentRef::from_listing(fields::opt_str(obj, "ostypeid")?),
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.os_type.resolve(ParentKind::OsType, lookup)?;
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for Template {
    const KIND: RecordKind = RecordKind::Template;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iso {
    pub uuid: String,
    pub name: Option<String>,
    pub display_text: Option<String>,
    /// Bytes.
    pub size: Option<i64>,
    pub bootable: Option<bool>,
    pub is_ready: Option<bool>,
    pub is_public: Option<bool>,
    pub is_featured: Option<bool>,
    pub os_type: ParentRef,
    pub zone: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl Iso {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            display_text: fields::opt_str(obj, "displaytext")?,
            size: fields::opt_i64(obj, "size")?,
            bootable: fields::opt_bool(obj, "bootable")?,
            is_ready: fields::opt_bool(obj, "isready")?,
            is_public: fields::opt_bool(obj, "ispublic")?,
            is_featured: fields::opt_bool(obj, "isfeatured")?,
            os_type: ParentRef::from_listing(fields::opt_str(obj, "ostypeid")?),
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.os_type.resolve(ParentKind::OsType, lookup)?;
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for Iso {
    const KIND: RecordKind = RecordKind::Iso;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
