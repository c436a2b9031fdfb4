//! Client records

use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::define_status_enum;

define_status_enum! {
    /// Relationship status of a client
    pub enum ClientStatus {
        Active => "active",
        Inactive => "inactive",
        Prospect => "prospect",
    }
}

impl Default for ClientStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Client record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: Option<ClientStatus>,
    #[serde(rename = "CreatedOn", default)]
    pub created_on: Option<String>,
}

/// Request to create a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    /// Defaults to `active`
    pub status: Option<ClientStatus>,
}

/// Partial update of a client; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub status: Option<ClientStatus>,
}

/// Client columns in store naming, as sent in write batches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientFields {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
}

impl NewClient {
    pub fn into_fields(self) -> ClientFields {
        ClientFields {
            id: None,
            name: Some(self.name),
            email: self.email,
            company: self.company,
            status: Some(self.status.unwrap_or_default()),
        }
    }
}

impl ClientChanges {
    pub fn into_fields(self, id: RecordId) -> ClientFields {
        ClientFields {
            id: Some(id),
            name: self.name,
            email: self.email,
            company: self.company,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_client_defaults_to_active() {
        let fields = NewClient { name: "Acme".into(), ..NewClient::default() }.into_fields();
        assert_eq!(
            serde_json::to_value(fields).unwrap(),
            json!({"Name": "Acme", "status": "active"})
        );
    }

    #[test]
    fn decodes_store_record() {
        let client: Client = serde_json::from_value(json!({
            "Id": 3,
            "Name": "Acme",
            "email": "ops@acme.test",
            "company": null,
            "status": "prospect",
            "CreatedOn": "2024-01-02T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(client.id, 3);
        assert_eq!(client.status, Some(ClientStatus::Prospect));
        assert_eq!(client.company, None);
    }
}
