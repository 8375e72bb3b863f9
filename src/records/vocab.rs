//! Shared enum vocabularies for listing fields.
//!
//! The external API speaks lowercase or mixed-case tokens ("enabled",
//! "RoundRobin") and positional integer codes; local vocabularies are
//! uppercase enum members. Parsing is case-normalized and an unknown token
//! or code is an `UnrecognizedEnumValue`, never a silent default.

use serde::Serialize;

use crate::error::NormalizeError;

/// Account category, emitted by the API as a zero-based positional code.
///
/// Code order (0=USER, 1=ROOT_ADMIN, 2=DOMAIN_ADMIN) is part of the
/// `listAccounts` response contract; `from_code` spells the table out so a
/// reorder of this enum can never shift the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    User,
    RootAdmin,
    DomainAdmin,
}

impl AccountType {
    pub fn from_code(field: &'static str, code: i64) -> Result<Self, NormalizeError> {
        match code {
            0 => Ok(AccountType::User),
            1 => Ok(AccountType::RootAdmin),
            2 => Ok(AccountType::DomainAdmin),
            other => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: other.to_string(),
            }),
        }
    }
}

/// Administrative status for accounts, users and physical networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Enabled,
    Disabled,
    Locked,
}

impl EntityStatus {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ENABLED" => Ok(EntityStatus::Enabled),
            "DISABLED" => Ok(EntityStatus::Disabled),
            "LOCKED" => Ok(EntityStatus::Locked),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Transport protocol on firewall and port-forwarding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    All,
}

impl Protocol {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "TCP" => Ok(Protocol::Tcp),
            "UDP" => Ok(Protocol::Udp),
            "ICMP" => Ok(Protocol::Icmp),
            "ALL" => Ok(Protocol::All),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Traffic direction for network rules.
///
/// Not read from the listing JSON: the caller supplies it out-of-band,
/// since egress and ingress rules arrive from separate list calls with an
/// identical object shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficType {
    Ingress,
    Egress,
}

/// Rule lifecycle state on firewall, LB and port-forwarding listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleState {
    Staged,
    Add,
    Active,
    Deleting,
}

impl RuleState {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "STAGED" => Ok(RuleState::Staged),
            "ADD" => Ok(RuleState::Add),
            "ACTIVE" => Ok(RuleState::Active),
            "DELETING" => Ok(RuleState::Deleting),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Load-balancer distribution algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LbAlgorithm {
    RoundRobin,
    LeastConn,
    Source,
}

impl LbAlgorithm {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "ROUNDROBIN" => Ok(LbAlgorithm::RoundRobin),
            "LEASTCONN" => Ok(LbAlgorithm::LeastConn),
            "SOURCE" => Ok(LbAlgorithm::Source),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Backing storage class on offerings and volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    Shared,
    Local,
}

impl StorageType {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "SHARED" => Ok(StorageType::Shared),
            "LOCAL" => Ok(StorageType::Local),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Disk provisioning mode on offerings and volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningType {
    Thin,
    Sparse,
    Fat,
}

impl ProvisioningType {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, NormalizeError> {
        match raw.to_uppercase().as_str() {
            "THIN" => Ok(ProvisioningType::Thin),
            "SPARSE" => Ok(ProvisioningType::Sparse),
            "FAT" => Ok(ProvisioningType::Fat),
            _ => Err(NormalizeError::UnrecognizedEnumValue {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_code_order() {
        assert_eq!(
            AccountType::from_code("accounttype", 0).unwrap(),
            AccountType::User
        );
        assert_eq!(
            AccountType::from_code("accounttype", 1).unwrap(),
            AccountType::RootAdmin
        );
        assert_eq!(
            AccountType::from_code("accounttype", 2).unwrap(),
            AccountType::DomainAdmin
        );
    }

    #[test]
    fn test_account_type_unknown_code() {
        let err = AccountType::from_code("accounttype", 7).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnrecognizedEnumValue {
                field: "accounttype",
                value: "7".to_string()
            }
        );
    }

    #[test]
    fn test_status_case_normalized() {
        assert_eq!(
            EntityStatus::parse("state", "enabled").unwrap(),
            EntityStatus::Enabled
        );
        assert_eq!(
            EntityStatus::parse("state", "Disabled").unwrap(),
            EntityStatus::Disabled
        );
        assert!(EntityStatus::parse("state", "archived").is_err());
    }

    #[test]
    fn test_protocol_parse() {
        assert_eq!(Protocol::parse("protocol", "tcp").unwrap(), Protocol::Tcp);
        assert_eq!(Protocol::parse("protocol", "ICMP").unwrap(), Protocol::Icmp);
        assert!(Protocol::parse("protocol", "sctp").is_err());
    }

    #[test]
    fn test_lb_algorithm_parse() {
        assert_eq!(
            LbAlgorithm::parse("algorithm", "roundrobin").unwrap(),
            LbAlgorithm::RoundRobin
        );
        assert_eq!(
            LbAlgorithm::parse("algorithm", "leastconn").unwrap(),
            LbAlgorithm::LeastConn
        );
        assert!(LbAlgorithm::parse("algorithm", "random").is_err());
    }
}
