//! Project records

use serde::{Deserialize, Serialize};

use super::store::RecordRef;
use super::RecordId;
use crate::define_status_enum;

define_status_enum! {
    /// Delivery status of a project
    pub enum ProjectStatus {
        Planning => "planning",
        Active => "active",
        OnHold => "on-hold",
        Completed => "completed",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

/// Project record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub client_id: Option<RecordRef>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == Some(ProjectStatus::Active)
    }
}

/// Request to create a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    /// Defaults to `planning`
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub client_id: RecordId,
}

/// Partial update of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub client_id: Option<RecordId>,
}

/// Project columns in store naming
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFields {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<RecordId>,
}

impl NewProject {
    pub fn into_fields(self) -> ProjectFields {
        ProjectFields {
            id: None,
            name: Some(self.name),
            status: Some(self.status.unwrap_or_default()),
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            client_id: Some(self.client_id),
        }
    }
}

impl ProjectChanges {
    pub fn into_fields(self, id: RecordId) -> ProjectFields {
        ProjectFields {
            id: Some(id),
            name: self.name,
            status: self.status,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            client_id: self.client_id,
        }
    }
}
