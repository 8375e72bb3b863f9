//! Canonical record types and per-kind normalizers.
//!
//! One module per resource family, each converting a CloudStack listing
//! object into a canonical record:
//! - `account` - accounts with their nested first user
//! - `affinity` - affinity groups
//! - `offering` - compute and storage (disk) offerings
//! - `image` - templates and ISOs
//! - `network` - NICs and physical networks
//! - `rules` - firewall, load-balancer and port-forwarding rules
//! - `storage` - volumes, primary and secondary storage
//! - `snapshot` - snapshot policies and VM snapshots
//! - `limits` - department and project resource limits
//! - `vpn` - VPN customer gateways and VPN users

use std::fmt;

use serde::Serialize;

pub mod account;
pub mod affinity;
pub mod image;
pub mod limits;
pub mod network;
pub mod offering;
pub mod rules;
pub mod snapshot;
pub mod storage;
pub mod vocab;
pub mod vpn;

pub use account::*;
pub use affinity::*;
pub use image::*;
pub use limits::*;
pub use network::*;
pub use offering::*;
pub use rules::*;
pub use snapshot::*;
pub use storage::*;
pub use vocab::*;
pub use vpn::*;

/// Every entity kind the synchronizer mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Account,
    AffinityGroup,
    ComputeOffering,
    Iso,
    Nic,
    FirewallRule,
    LoadBalancerRule,
    PortForwarding,
    PhysicalNetwork,
    PrimaryStorage,
    SecondaryStorage,
    SnapshotPolicy,
    StorageOffering,
    Template,
    ResourceLimitDepartment,
    ResourceLimitProject,
    VpnCustomerGateway,
    VpnUser,
    VmSnapshot,
    Volume,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Account => "account",
            RecordKind::AffinityGroup => "affinity_group",
            RecordKind::ComputeOffering => "compute_offering",
            RecordKind::Iso => "iso",
            RecordKind::Nic => "nic",
            RecordKind::FirewallRule => "firewall_rule",
            RecordKind::LoadBalancerRule => "load_balancer_rule",
            RecordKind::PortForwarding => "port_forwarding",
            RecordKind::PhysicalNetwork => "physical_network",
            RecordKind::PrimaryStorage => "primary_storage",
            RecordKind::SecondaryStorage => "secondary_storage",
            RecordKind::SnapshotPolicy => "snapshot_policy",
            RecordKind::StorageOffering => "storage_offering",
            RecordKind::Template => "template",
            RecordKind::ResourceLimitDepartment => "resource_limit_department",
            RecordKind::ResourceLimitProject => "resource_limit_project",
            RecordKind::VpnCustomerGateway => "vpn_customer_gateway",
            RecordKind::VpnUser => "vpn_user",
            RecordKind::VmSnapshot => "vm_snapshot",
            RecordKind::Volume => "volume",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record produced by normalization, correlated with the external system
/// by its immutable uuid. Local surrogate ids are owned by the persistence
/// layer and never appear here.
pub trait SyncRecord {
    const KIND: RecordKind;

    /// The external system's permanent identifier, copied verbatim from the
    /// listing's `id` field.
    fn uuid(&self) -> &str;
}
