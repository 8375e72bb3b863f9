//! Deferred parent-reference resolution.
//!
//! At normalization time a record only knows its parents by external uuid;
//! the local numeric id exists once the parent row has been synced. The two
//! stages are modeled as one enum so a reference is never pending and
//! resolved at the same time.
//!
//! The synchronizer drives resolution after all listings of a pass are
//! normalized, supplying a [`ParentLookup`] over the already-synced rows.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Parent entity kinds a record can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentKind {
    Domain,
    Zone,
    Department,
    Project,
    Network,
    VmInstance,
    Volume,
    IpAddress,
    OsType,
    DiskOffering,
    Pod,
    Cluster,
}

impl ParentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentKind::Domain => "domain",
            ParentKind::Zone => "zone",
            ParentKind::Department => "department",
            ParentKind::Project => "project",
            ParentKind::Network => "network",
            ParentKind::VmInstance => "vm_instance",
            ParentKind::Volume => "volume",
            ParentKind::IpAddress => "ip_address",
            ParentKind::OsType => "os_type",
            ParentKind::DiskOffering => "disk_offering",
            ParentKind::Pod => "pod",
            ParentKind::Cluster => "cluster",
        }
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution failure: the referenced parent has not been synced yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no synced {kind} with uuid `{uuid}`")]
    UnknownParent { kind: ParentKind, uuid: String },
}

/// A staged reference to a parent entity.
///
/// `Pending` holds the external uuid captured from the listing; `Resolved`
/// holds the local numeric id and discards the uuid. A listing that omits
/// the relation yields `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParentRef {
    #[default]
    Absent,
    Pending(String),
    Resolved(i64),
}

impl ParentRef {
    /// Stage a reference from an optional listing field.
    pub fn from_listing(uuid: Option<String>) -> Self {
        match uuid {
            Some(u) if !u.is_empty() => ParentRef::Pending(u),
            _ => ParentRef::Absent,
        }
    }

    /// External uuid, while unresolved.
    pub fn pending_uuid(&self) -> Option<&str> {
        match self {
            ParentRef::Pending(uuid) => Some(uuid),
            _ => None,
        }
    }

    /// Local numeric id, once resolved.
    pub fn local_id(&self) -> Option<i64> {
        match self {
            ParentRef::Resolved(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ParentRef::Absent)
    }

    /// Move a pending reference to resolved via the lookup.
    ///
    /// No-op for `Absent` and already-resolved references. Errors when the
    /// parent uuid is not known to the lookup, which means the parent kind
    /// has not been synced yet in this pass ordering.
    pub fn resolve(
        &mut self,
        kind: ParentKind,
        lookup: &impl ParentLookup,
    ) -> Result<(), ResolveError> {
        if let ParentRef::Pending(uuid) = self {
            match lookup.local_id(kind, uuid) {
                Some(id) => {
                    *self = ParentRef::Resolved(id);
                    Ok(())
                }
                None => Err(ResolveError::UnknownParent {
                    kind,
                    uuid: uuid.clone(),
                }),
            }
        } else {
            Ok(())
        }
    }
}

/// Lookup-by-uuid capability over already-synced parent entities.
///
/// Implemented by the synchronizer against its persistence layer.
pub trait ParentLookup {
    fn local_id(&self, kind: ParentKind, uuid: &str) -> Option<i64>;
}


#[cfg(test)]
mod tests {
    use super::test_support::MapLookup;
    use super::*;

    #[test]
    fn test_from_listing() {
        assert_eq!(
            ParentRef::from_listing(Some("dom-1".to_string())),
            ParentRef::Pending("dom-1".to_string())
        );
        assert_eq!(ParentRef::from_listing(Some(String::new())), ParentRef::Absent);
        assert_eq!(ParentRef::from_listing(None), ParentRef::Absent);
    }

    #[test]
    fn test_resolve_pending() {
        let lookup = MapLookup::default().with(ParentKind::Domain, "dom-1", 42);

        let mut parent = ParentRef::Pending("dom-1".to_string());
        parent.resolve(ParentKind::Domain, &lookup).unwrap();
        assert_eq!(parent, ParentRef::Resolved(42));
        // The uuid is gone once the local id is in place.
        assert_eq!(parent.pending_uuid(), None);
        assert_eq!(parent.local_id(), Some(42));
    }

    #[test]
    fn test_resolve_unknown_parent() {
        let lookup = MapLookup::default();
        let mut parent = ParentRef::Pending("zone-9".to_string());

        let err = parent.resolve(ParentKind::Zone, &lookup).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownParent {
                kind: ParentKind::Zone,
                uuid: "zone-9".to_string()
            }
        );
        // Still pending; a later pass can retry.
        assert_eq!(parent.pending_uuid(), Some("zone-9"));
    }

    #[test]
    fn test_resolve_noop_for_absent_and_resolved() {
        let lookup = MapLookup::default();

        let mut absent = ParentRef::Absent;
        absent.resolve(ParentKind::Network, &lookup).unwrap();
        assert!(absent.is_absent());

        let mut resolved = ParentRef::Resolved(7);
        resolved.resolve(ParentKind::Network, &lookup).unwrap();
        assert_eq!(resolved, ParentRef::Resolved(7));
    }
}
