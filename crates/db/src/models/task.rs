//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::{codes, CoreError};
use taskboard_core::fields::{non_blank, nullable, required_text, RawInt};
use taskboard_core::types::{DbId, Timestamp};

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub status: TaskStatus,
    pub assigned_to: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create payload as received over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub project_id: Option<RawInt>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<RawInt>,
}

/// Validated command for inserting a task. References are checked
/// against the store separately.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub project_id: DbId,
    pub name: String,
    pub status: TaskStatus,
    pub assigned_to: Option<DbId>,
}

impl CreateTaskRequest {
    pub fn validate(self) -> Result<CreateTask, CoreError> {
        let raw_project_id = self
            .project_id
            .ok_or(CoreError::MissingField { field: "projectId" })?;
        let name = required_text("name", self.name)?;

        let project_id = raw_project_id.parse(codes::INVALID_PROJECT_ID, "projectId")?;
        let status = match self.status.as_deref() {
            Some(raw) => TaskStatus::parse(raw)?,
            None => TaskStatus::default(),
        };
        let assigned_to = self
            .assigned_to
            .map(|raw| raw.parse(codes::INVALID_ASSIGNED_TO, "assignedTo"))
            .transpose()?;

        Ok(CreateTask {
            project_id,
            name,
            status,
            assigned_to,
        })
    }
}

/// Partial update payload as received over the wire.
///
/// `assignedTo: null` unassigns the task; an absent field keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub project_id: Option<RawInt>,
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub assigned_to: Option<Option<RawInt>>,
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<Option<DbId>>,
}

impl UpdateTaskRequest {
    pub fn validate(self) -> Result<UpdateTask, CoreError> {
        let name = self
            .name
            .map(|n| non_blank("name", codes::INVALID_NAME, n))
            .transpose()?;
        let status = self.status.as_deref().map(TaskStatus::parse).transpose()?;
        let project_id = self
            .project_id
            .map(|raw| raw.parse(codes::INVALID_PROJECT_ID, "projectId"))
            .transpose()?;
        let assigned_to = match self.assigned_to {
            Some(Some(raw)) => Some(Some(raw.parse(codes::INVALID_ASSIGNED_TO, "assignedTo")?)),
            Some(None) => Some(None),
            None => None,
        };

        Ok(UpdateTask {
            project_id,
            name,
            status,
            assigned_to,
        })
    }
}

impl UpdateTask {
    /// Whether applying this update can change a project's derived progress.
    pub fn affects_progress(&self) -> bool {
        self.status.is_some() || self.project_id.is_some()
    }
}

/// Filters for listing tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskListFilter {
    /// Case-insensitive substring over the task name.
    pub search: Option<String>,
    pub project_id: Option<DbId>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<DbId>,
    pub limit: i64,
    pub offset: i64,
}
