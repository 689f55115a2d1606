//! Query parameter types for list and search endpoints.
//!
//! Every value arrives as a raw string and is parsed here, so malformed
//! numbers or unknown statuses become coded 400 errors instead of axum's
//! generic rejection.

use serde::Deserialize;
use taskboard_core::error::{codes, CoreError};
use taskboard_core::fields::parse_int;
use taskboard_core::search::{
    clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_LIST_LIMIT,
};
use taskboard_db::models::project::ProjectListFilter;
use taskboard_db::models::status::{ProjectStatus, TaskStatus};
use taskboard_db::models::task::TaskListFilter;
use taskboard_db::models::team_member::TeamMemberListFilter;

/// Pagination parameters (`?limit=&offset=`).
///
/// `limit` defaults to 10 and is clamped to `[1, 100]`; `offset` defaults
/// to 0 and is floored at 0.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    /// Resolve to a `(limit, offset)` pair.
    pub fn resolve(&self, default_limit: i64) -> Result<(i64, i64), CoreError> {
        let limit = optional_int(self.limit.as_deref(), codes::INVALID_QUERY, "limit")?;
        let offset = optional_int(self.offset.as_deref(), codes::INVALID_QUERY, "offset")?;
        Ok((
            clamp_limit(limit, default_limit, MAX_LIST_LIMIT),
            clamp_offset(offset),
        ))
    }
}

/// `GET /projects` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

impl ProjectListParams {
    pub fn into_filter(self) -> Result<ProjectListFilter, CoreError> {
        let (limit, offset) = self.page.resolve(DEFAULT_LIST_LIMIT)?;
        let status = non_empty(self.status.as_deref())
            .map(ProjectStatus::parse)
            .transpose()?;
        Ok(ProjectListFilter {
            search: self.search,
            status,
            limit,
            offset,
        })
    }
}

/// `GET /tasks` parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListParams {
    pub search: Option<String>,
    pub project_id: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

impl TaskListParams {
    pub fn into_filter(self) -> Result<TaskListFilter, CoreError> {
        let project_id = optional_int(
            self.project_id.as_deref(),
            codes::INVALID_PROJECT_ID,
            "projectId",
        )?;
        let assigned_to = optional_int(
            self.assigned_to.as_deref(),
            codes::INVALID_ASSIGNED_TO,
            "assignedTo",
        )?;
        let status = non_empty(self.status.as_deref())
            .map(TaskStatus::parse)
            .transpose()?;
        let (limit, offset) = self.page.resolve(DEFAULT_LIST_LIMIT)?;
        Ok(TaskListFilter {
            search: self.search,
            project_id,
            status,
            assigned_to,
            limit,
            offset,
        })
    }
}

/// `GET /team-members` parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberListParams {
    pub search: Option<String>,
    pub include_task_count: Option<String>,
    #[serde(flatten)]
    pub page: PaginationParams,
}

impl TeamMemberListParams {
    /// Whether `includeTaskCount` was set to a truthy value.
    pub fn include_task_count(&self) -> bool {
        matches!(self.include_task_count.as_deref(), Some("true" | "1"))
    }

    pub fn to_filter(&self) -> Result<TeamMemberListFilter, CoreError> {
        let (limit, offset) = self.page.resolve(DEFAULT_LIST_LIMIT)?;
        Ok(TeamMemberListFilter {
            search: self.search.clone(),
            limit,
            offset,
        })
    }
}

/// `GET /search` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    /// Per-entity result limit, defaulting to 5.
    pub fn limit(&self) -> Result<i64, CoreError> {
        let limit = optional_int(self.limit.as_deref(), codes::INVALID_QUERY, "limit")?;
        Ok(clamp_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_LIST_LIMIT))
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse an optional integer parameter; blank counts as absent.
fn optional_int(
    raw: Option<&str>,
    code: &'static str,
    field: &'static str,
) -> Result<Option<i64>, CoreError> {
    non_empty(raw)
        .map(|v| {
            parse_int(v)
                .ok_or_else(|| CoreError::invalid(code, format!("{field} must be a valid integer")))
        })
        .transpose()
}
