//! VPN customer gateway and VPN user normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnCustomerGateway {
    pub uuid: String,
    pub name: Option<String>,
    /// Public IP of the remote gateway.
    pub gateway: Option<String>,
    pub cidr_list: Option<String>,
    pub ipsec_psk: Option<String>,
    pub ike_policy: Option<String>,
    pub esp_policy: Option<String>,
    /// Seconds.
    pub ike_lifetime: Option<i64>,
    /// Seconds.
    pub esp_lifetime: Option<i64>,
    pub dpd: Option<bool>,
    pub domain: ParentRef,
    pub project: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl VpnCustomerGateway {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            gateway: fields::opt_str(obj, "gateway")?,
            cidr_list: fields::opt_str(obj, "cidrlist")?,
            ipsec_psk: fields::opt_str(obj, "ipsecpsk")?,
            ike_policy: fields::opt_str(obj, "ikepolicy")?,
            esp_policy: fields::opt_str(obj, "esppolicy")?,
            ike_lifetime: fields::opt_i64(obj, "ikelifetime")?,
            esp_lifetime: fields::opt_i64(obj, "esplifetime")?,
            dpd: fields::opt_bool(obj, "dpd")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            project: ParentRef::from_listing(fields::opt_str(obj, "projectid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)?;
        self.project.resolve(ParentKind::Project, lookup)
    }
}

impl SyncRecord for VpnCustomerGateway {
    const KIND: RecordKind = RecordKind::VpnCustomerGateway;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

/// Remote-access VPN user lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VpnUserStatus {
    Add,
    Active,
    Revoke,
}

impl VpnUserStatus {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ADD" => Ok(VpnUserStatus::Add),
            "ACTIVE" => Ok(VpnUserStatus::Active),
            "REVOKE" => Ok(VpnUserStatus::Revoke),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VpnUser {
    pub uuid: String,
    pub user_name: Option<String>,
    pub status: Option<VpnUserStatus>,
    /// Owning account name as listed; correlation runs via the domain ref.
    pub account: Option<String>,
    pub domain: ParentRef,
    pub project: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl VpnUser {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let status = fields::opt_str(obj, "state")?
            .map(|raw| VpnUserStatus::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            user_name: fields::opt_str(obj, "username")?,
            status,
            account: fields::opt_str(obj, "account")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            project: ParentRef::from_listing(fields::opt_str(obj, "projectid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)?;
        self.project.resolve(ParentKind::Project, lookup)
    }
}

impl SyncRecord for VpnUser {
    const KIND: RecordKind = RecordKind::VpnUser;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
