//! Team member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::{codes, CoreError};
use taskboard_core::fields::{non_blank, nullable, optional_text, required_text};
use taskboard_core::team::validate_email;
use taskboard_core::types::{DbId, Timestamp};

/// A team member row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub created_at: Timestamp,
}

/// A team member with the number of tasks assigned to them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberWithTaskCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub member: TeamMember,
    pub task_count: i64,
}

/// Create payload as received over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Validated command for inserting a team member. `email` is normalized
/// (trimmed, lower-cased).
#[derive(Debug, Clone)]
pub struct CreateTeamMember {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

impl CreateTeamMemberRequest {
    pub fn validate(self) -> Result<CreateTeamMember, CoreError> {
        let name = required_text("name", self.name)?;
        let email = required_text("email", self.email)?;

        Ok(CreateTeamMember {
            name,
            email: validate_email(&email)?,
            role: optional_text(self.role),
        })
    }
}

/// Partial update payload as received over the wire.
///
/// `role: null` clears the role; an absent field keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub role: Option<Option<String>>,
}

/// Validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Option<String>>,
}

impl UpdateTeamMemberRequest {
    pub fn validate(self) -> Result<UpdateTeamMember, CoreError> {
        let name = self
            .name
            .map(|n| non_blank("name", codes::INVALID_NAME, n))
            .transpose()?;
        let email = self.email.as_deref().map(validate_email).transpose()?;

        Ok(UpdateTeamMember {
            name,
            email,
            role: self.role.map(optional_text),
        })
    }
}

/// Filters for listing team members.
#[derive(Debug, Clone, Default)]
pub struct TeamMemberListFilter {
    /// Case-insensitive substring over name and email.
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}
