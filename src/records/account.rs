//! Account normalization.
//!
//! `listAccounts` nests the account's users; the first user element
//! supplies the portal-facing identity fields (name, username, email) and
//! is mandatory, an account without it is rejected rather than defaulted.

use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::extraction::fields;
use crate::records::vocab::{AccountType, EntityStatus};
use crate::records::{RecordKind, SyncRecord};
use crate::resolve::{ParentKind, ParentLookup, ParentRef, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub uuid: String,
    pub name: Option<String>,
    pub account_type: AccountType,
    pub status: Option<EntityStatus>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub domain: ParentRef,
    pub is_active: bool,
    #[serde(skip)]
    pub sync_flag: bool,
}

impl Account {
    /// Normalize one `listAccounts` response object.
    ///
    /// The positional `accounttype` code is read from the account object
    /// when present, otherwise from the nested user element (the API emits
    /// it in either place depending on version).
    pub fn from_listing(obj: &Value) -> Result<Self, NormalizeError> {
        let uuid = fields::req_str(obj, "id")?;

        let user = obj
            .get("user")
            .and_then(Value::as_array)
            .and_then(|users| users.first())
            .ok_or(NormalizeError::MissingRequiredField { field: "user" })?;

        let type_code = match fields::opt_i64(obj, "accounttype")? {
            Some(code) => code,
            None => fields::opt_i64(user, "accounttype")?
                .ok_or(NormalizeError::MissingRequiredField { field: "accounttype" })?,
        };
        let account_type = AccountType::from_code("accounttype", type_code)?;

        let state = match fields::opt_str(obj, "state")? {
            Some(raw) => Some(raw),
            None => fields::opt_str(user, "state")?,
        };
        let status = state
            .map(|raw| EntityStatus::parse("state", &raw))
            .transpose()?;

        Ok(Self {
            uuid,
            name: fields::opt_str(obj, "name")?,
            account_type,
            status,
            first_name: fields::opt_str(user, "firstname")?,
            last_name: fields::opt_str(user, "lastname")?,
            user_name: fields::opt_str(user, "username")?,
            email: fields::opt_str(user, "email")?,
            domain: ParentRef::from_listing(fields::opt_str(obj, "domainid")?),
            is_active: true,
            sync_flag: false,
        })
    }

    pub fn resolve_parents(&mut self, lookup: &impl ParentLookup) -> Result<(), ResolveError> {
        self.domain.resolve(ParentKind::Domain, lookup)
    }
}

impl SyncRecord for Account {
    const KIND: RecordKind = RecordKind::Account;

    fn uuid(&self) -> &str {
        &self.uuid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing() -> Value {
        json!({
            "id": "abc-123",
            "domainid": "dom-1",
            "user": [{
                "firstname": "Jane",
                "lastname": "Doe",
                "username": "jdoe",
                "accounttype": 1,
                "email": "jdoe@x.com",
                "state": "enabled"
            }]
        })
    }

    #[test]
    fn test_account_conversion() {
        let account = Account::from_listing(&listing()).unwrap();

        assert_eq!(account.uuid, "abc-123");
        assert_eq!(account.first_name.as_deref(), Some("Jane"));
        assert_eq!(account.last_name.as_deref(), Some("Doe"));
        assert_eq!(account.user_name.as_deref(), Some("jdoe"));
        assert_eq!(account.account_type, AccountType::RootAdmin);
        assert_eq!(account.email.as_deref(), Some("jdoe@x.com"));
        assert_eq!(account.status, Some(EntityStatus::Enabled));
        assert!(account.is_active);
        assert!(!account.sync_flag);
        assert_eq!(account.domain.pending_uuid(), Some("dom-1"));
    }

    #[test]
    fn test_account_type_codes() {
        for (code, expected) in [
            (0, AccountType::User),
            (1, AccountType::RootAdmin),
            (2, AccountType::DomainAdmin),
        ] {
            let obj = json!({
                "id": "a-1",
                "accounttype": code,
                "user": [{"username": "u"}]
            });
            let account = Account::from_listing(&obj).unwrap();
            assert_eq!(account.account_type, expected);
        }
    }

    #[test]
    fn test_account_missing_id() {
        let mut obj = listing();
        obj.as_object_mut().unwrap().remove("id");
        assert_eq!(
            Account::from_listing(&obj).unwrap_err(),
            NormalizeError::MissingRequiredField { field: "id" }
        );
    }

    #[test]
    fn test_account_missing_user_element() {
        let obj = json!({"id": "abc-123", "accounttype": 0, "user": []});
        assert_eq!(
            Account::from_listing(&obj).unwrap_err(),
            NormalizeError::MissingRequiredField { field: "user" }
        );

        let obj = json!({"id": "abc-123", "accounttype": 0});
        assert_eq!(
            Account::from_listing(&obj).unwrap_err(),
            NormalizeError::MissingRequiredField { field: "user" }
        );
    }

    #[test]
    fn test_account_unknown_state_rejected() {
        let obj = json!({
            "id": "abc-123",
            "state": "hibernating",
            "user": [{"accounttype": 0}]
        });
        assert!(matches!(
            Account::from_listing(&obj).unwrap_err(),
            NormalizeError::UnrecognizedEnumValue { field: "state", .. }
        ));
    }

    #[test]
    fn test_account_resolve_domain() {
        use crate::resolve::test_support::MapLookup;

        let mut account = Account::from_listing(&listing()).unwrap();
        let lookup = MapLookup::default().with(ParentKind::Domain, "dom-1", 11);

        account.resolve_parents(&lookup).unwrap();
        assert_eq!(account.domain.local_id(), Some(11));
    }

    #[test]
    fn test_account_idempotent() {
        let first = Account::from_listing(&listing()).unwrap();
        let second = Account::from_listing(&listing()).unwrap();
        assert_eq!(first, second);
    }
}
