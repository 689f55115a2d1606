//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::{codes, CoreError};
use taskboard_core::fields::{non_blank, nullable, optional_text, required_text, RawInt};
use taskboard_core::progress::validate_progress;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::status::ProjectStatus;
use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub status: ProjectStatus,
    pub progress: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with all of its tasks.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTasks {
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// Create payload as received over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub status: Option<String>,
    pub progress: Option<RawInt>,
    pub description: Option<String>,
}

/// Validated command for inserting a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub status: ProjectStatus,
    pub progress: i32,
    pub description: Option<String>,
}

impl CreateProjectRequest {
    /// Required fields, then format and range checks.
    pub fn validate(self) -> Result<CreateProject, CoreError> {
        let name = required_text("name", self.name)?;

        let progress = match self.progress {
            Some(raw) => validate_progress(raw.parse(codes::INVALID_PROGRESS, "progress")?)?,
            None => 0,
        };
        let status = match self.status.as_deref() {
            Some(raw) => ProjectStatus::parse(raw)?,
            None => ProjectStatus::default(),
        };

        Ok(CreateProject {
            name,
            status,
            progress,
            description: optional_text(self.description),
        })
    }
}

/// Partial update payload as received over the wire.
///
/// `description: null` clears the description; an absent field keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub status: Option<String>,
    pub progress: Option<RawInt>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<i32>,
    pub description: Option<Option<String>>,
}

impl UpdateProjectRequest {
    pub fn validate(self) -> Result<UpdateProject, CoreError> {
        let name = self
            .name
            .map(|n| non_blank("name", codes::INVALID_NAME, n))
            .transpose()?;
        let progress = self
            .progress
            .map(|raw| validate_progress(raw.parse(codes::INVALID_PROGRESS, "progress")?))
            .transpose()?;
        let status = self.status.as_deref().map(ProjectStatus::parse).transpose()?;

        Ok(UpdateProject {
            name,
            status,
            progress,
            description: self.description.map(optional_text),
        })
    }
}

/// Filters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
    pub status: Option<ProjectStatus>,
    pub limit: i64,
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn create(json: serde_json::Value) -> Result<CreateProject, CoreError> {
        serde_json::from_value::<CreateProjectRequest>(json)
            .unwrap()
            .validate()
    }

    #[test]
    fn create_applies_defaults_and_trims() {
        let input = create(serde_json::json!({"name": "  Website  ", "description": "  "})).unwrap();
        assert_eq!(input.name, "Website");
        assert_eq!(input.status, ProjectStatus::Planning);
        assert_eq!(input.progress, 0);
        assert_eq!(input.description, None);
    }

    #[test]
    fn create_requires_name_before_other_checks() {
        let err = create(serde_json::json!({"progress": 500, "status": "Bogus"})).unwrap_err();
        assert_matches!(err, CoreError::MissingField { field: "name" });
    }

    #[test]
    fn create_rejects_out_of_range_progress() {
        let err = create(serde_json::json!({"name": "A", "progress": 101})).unwrap_err();
        assert_eq!(err.code(), "INVALID_PROGRESS");
    }

    #[test]
    fn create_rejects_non_numeric_progress() {
        let err = create(serde_json::json!({"name": "A", "progress": "lots"})).unwrap_err();
        assert_eq!(err.code(), "INVALID_PROGRESS");
    }

    #[test]
    fn create_rejects_unknown_status() {
        let err = create(serde_json::json!({"name": "A", "status": "Done"})).unwrap_err();
        assert_eq!(err.code(), "INVALID_STATUS");
    }

    #[test]
    fn update_distinguishes_null_description() {
        let cleared: UpdateProjectRequest =
            serde_json::from_value(serde_json::json!({"description": null})).unwrap();
        assert_eq!(cleared.validate().unwrap().description, Some(None));

        let untouched: UpdateProjectRequest =
            serde_json::from_value(serde_json::json!({"name": "B"})).unwrap();
        let update = untouched.validate().unwrap();
        assert_eq!(update.description, None);
        assert_eq!(update.name.as_deref(), Some("B"));
    }

    #[test]
    fn update_rejects_blank_name() {
        let input: UpdateProjectRequest =
            serde_json::from_value(serde_json::json!({"name": "  "})).unwrap();
        assert_eq!(input.validate().unwrap_err().code(), "INVALID_NAME");
    }
}
