//! Affinity group normalization.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityGroup {
    pub uuid: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Group type token, e.g. "host anti-affinity". Passed through as-is;
    /// the deployment planner, not the portal, owns this vocabulary.
    pub group_type: Option<String>,
    /// Owning account name as listed; correlation runs via the domain ref.
    pub account: Option<String>,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl AffinityGroup {
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            uuid: fields::req_str(obj, "id")?,
            name: fields::opt_str(obj, "name")?,
            description: fields::opt_str(obj, "description")?,
            group_type: fields::opt_str(obj, "type")?,
            account: fields::opt_str(obj, "account")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for AffinityGroup {
    const KIND: RecordKind = RecordKind::AffinityGroup;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}
