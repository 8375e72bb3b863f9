//! NIC and physical network normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::vocab::EntityStatus;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nic {
    pub uuid: String,
    pub ip_address: Option<String>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub mac_address: Option<String>,
    pub is_default: Option<bool>,
    pub vm_instance: ParentRef,
    pub network: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl Nic {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            ip_address: fields::opt_str(obj, "ipaddress")?,
            gateway: fields::opt_str(obj, "gateway")?,
            netmask: fields::opt_str(obj, "netmask")?,
            mac_address: fields::opt_str(obj, "macaddress")?,
            is_default: fields::opt_bool(obj, "isdefault")?,
            vm_instance: ParentRef::from_listing(fields::opt_str(obj, "virtualmachineid")?),
            network: ParentRef::from_listing(fields::opt_str(obj, "networkid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.vm_instance.resolve(ParentKind::VmInstance, lookup)?;
        self.network.resolve(ParentKind::Network, lookup)
    }
}

impl SyncRecord for Nic {
    const KIND: RecordKind = RecordKind::Nic;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicalNetwork {
    pub uuid: String,
    pub name: Option<String>,
    pub status: Option<EntityStatus>,
    pub isolation_methods: Option<String>,
    pub vlan: Option<String>,
    pub broadcast_domain_range: Option<String>,
    pub zone: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl PhysicalNetwork {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let status = fields::opt_str(obj, "state")?
            .map(|raw| EntityStatus::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            status,
            isolation_methods: fields::opt_str(obj, "isolationmethods")?,
            vlan: fields::opt_str(obj, "vlan")?,
            broadcast_domain_range: fields::opt_str(obj, "broadcastdomainrange")?,
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for PhysicalNetwork {
    const KIND: RecordKind = RecordKind::PhysicalNetwork;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nic_conversion() {
        let obj = json!({
            "id": "nic-1",
            "ipaddress": "10.0.0.5",
            "gateway": "10.0.0.1",
            "isdefault": true,
            "netmask": "255.255.255.0",
            "virtualmachineid": "vm-7",
            "networkid": "net-3"
        });

        let nic = Nic::from_listing(&obj).unwrap();
        assert_eq!(nic.uuid, "nic-1");
        assert_eq!(nic.ip_address.as_deref(), Some("10.0.0.5"));
        assert_eq!(nic.gateway.as_deref(), Some("10.0.0.1"));
        assert_eq!(nic.netmask.as_deref(), Some("255.255.255.0"));
        assert_eq!(nic.is_default, Some(true));
        assert_eq!(nic.vm_instance.pending_uuid(), Some("vm-7"));
        assert_eq!(nic.network.pending_uuid(), Some("net-3"));
        assert!(nic.is_active);
        assert!(!nic.sync_flag);
    }

    #[test]
    fn test_nic_resolution() {
        use crate::resolve::test_support::MapLookup;

        let obj = json!({"id": "nic-1", "virtualmachineid": "vm-7", "networkid": "net-3"});
        let mut nic = Nic::from_listing(&obj).unwrap();

        let lookup = MapLookup::default()
            .with(ParentKind::VmInstance, "vm-7", 70)
            .with(ParentKind::Network, "net-3", 30);
        nic.resolve_parents(&lookup).unwrap();

        assert_eq!(nic.vm_instance.local_id(), Some(70));
        assert_eq!(nic.network.local_id(), Some(30));
    }

    #[test]
    fn test_physical_network_conversion() {
        let obj = json!({
            "id": "pn-1",
            "name": "Physical Network 1",
            "state": "Enabled",
            "isolationmethods": "VLAN",
            "broadcastdomainrange": "ZONE",
            "zoneid": "zone-1"
        });

        let net = PhysicalNetwork::from_listing(&obj).unwrap();
        assert_eq!(net.uuid, "pn-1");
        assert_eq!(net.status, Some(EntityStatus::Enabled));
        assert_eq!(net.isolation_methods.as_deref(), Some("VLAN"));
        assert_eq!(net.zone.pending_uuid(), Some("zone-1"));
    }
}
