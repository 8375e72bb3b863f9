//! Firewall, load-balancer and port-forwarding rule normalization.
//!
//! Egress and ingress listings share one JSON shape, so the traffic
//! direction is a discriminator the caller passes alongside each object.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::vocab::{LbAlgorithm, Protocol, RuleState, TrafficType};
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirewallRule {
    pub uuid: String,
    pub protocol: Protocol,
    pub traffic_type: TrafficType,
    pub start_port: Option<i64>,
    pub end_port: Option<i64>,
    pub icmp_type: Option<i64>,
    pub icmp_code: Option<i64>,
    pub cidr_list: Option<String>,
    pub state: Option<RuleState>,
    pub ip_address: ParentRef,
    pub network: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl FirewallRule {
    pub fn from_listing(obj: &Value, traffic_type: TrafficType) -> Result<Self, NormalizeError> {
        let protocol_raw = fields::opt_str(obj, "protocol")?
            .ok_or(NormalizeError::MissingRequiredField { field: "protocol" })?;
        let state = fields::opt_str(obj, "state")?
            .map(|raw| RuleState::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            protocol: Protocol::parse("protocol", &protocol_raw)?,
            traffic_type,
            start_port: fields::opt_i64(obj, "startport")?,
            end_port: fields::opt_i64(obj, "endport")?,
            icmp_type: fields::opt_i64(obj, "icmptype")?,
            icmp_code: fields::opt_i64(obj, "icmpcode")?,
            cidr_list: fields::opt_str(obj, "cidrlist")?,
            state,
            ip_address: ParentRef::from_listing(fields::opt_str(obj, "ipaddressid")?),
            network: ParentRef::from_listing(fields::opt_str(obj, "networkid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.ip_address.resolve(ParentKind::IpAddress, lookup)?;
        self.network.resolve(ParentKind::Network, lookup)
    }
}

impl SyncRecord for FirewallRule {
    const KIND: RecordKind = RecordKind::FirewallRule;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadBalancerRule {
    pub uuid: String,
    pub name: Option<String>,
    pub algorithm: Option<LbAlgorithm>,
    pub traffic_type: TrafficType,
    pub public_port: Option<i64>,
    pub private_port: Option<i64>,
    pub state: Option<RuleState>,
    pub public_ip: ParentRef,
    pub network: ParentRef,
    pub zone: ParentRef,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl LoadBalancerRule {
    pub fn from_listing(obj: &Value, traffic_type: TrafficType) -> Result<Self, NormalizeError> {
        let algorithm = fields::opt_str(obj, "algorithm")?
            .map(|raw| LbAlgorithm::parse("algorithm", &raw))
            .transpose()?;
        let state = fields::opt_str(obj, "state")?
            .map(|raw| RuleState::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            algorithm,
            traffic_type,
            public_port: fields::opt_i64(obj, "publicport")?,
            private_port: fields::opt_i64(obj, "privateport")?,
            state,
            public_ip: ParentRef::from_listing(fields::opt_str(obj, "publicipid")?),
            network: ParentRef::from_listing(fields::opt_str(obj, "networkid")?),
            zone: ParentRef::from_listing(fields::opt_str(obj, "zoneid")?),
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.public_ip.resolve(ParentKind::IpAddress, lookup)?;
        self.network.resolve(ParentKind::Network, lookup)?;
        self.zone.resolve(ParentKind::Zone, lookup)?;
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for LoadBalancerRule {
    const KIND: RecordKind = RecordKind::LoadBalancerRule;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortForwarding {
    pub uuid: String,
    pub protocol: Option<Protocol>,
    pub traffic_type: TrafficType,
    pub public_port: Option<i64>,
    pub public_end_port: Option<i64>,
    pub private_port: Option<i64>,
    pub private_end_port: Option<i64>,
    pub state: Option<RuleState>,
    pub vm_instance: ParentRef,
    pub ip_address: ParentRef,
    pub network: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl PortForwarding {
    pub fn from_listing(obj: &Value, traffic_type: TrafficType) -> Result<Self, NormalizeError> {
        let protocol = fields::opt_str(obj, "protocol")?
            .map(|raw| Protocol::parse("protocol", &raw))
            .transpose()?;
        let state = fields::opt_str(obj, "state")?
            .map(|raw| RuleState::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            protocol,
            traffic_type,
            public_port: fields::opt_i64(obj, "publicport")?,
            public_end_port: fields::opt_i64(obj, "publicendport")?,
            private_port: fields::opt_i64(obj, "privateport")?,
            private_end_port: fields::opt_i64(obj, "privateendport")?,
            state,
            vm_instance: ParentRef::from_listing(fields::opt_str(obj, "virtualmachineid")?),
            ip_address: ParentRef::from_listing(fields::opt_str(obj, "ipaddressid")?),
            network: ParentRef::from_listing(fields::opt_str(obj, "networkid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.vm_instance.resolve(ParentKind::VmInstance, lookup)?;
        self.ip_address.resolve(ParentKind::IpAddress, lookup)?;
        self.network.resolve(ParentKind::Network, lookup)
    }
}

impl SyncRecord for PortForwarding {
    const KIND: RecordKind = RecordKind::PortForwarding;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
