//! Status enums stored as TEXT columns.
//!
//! The serialized form (JSON and database) is the display string, e.g.
//! `"In Progress"` or `"complete"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use taskboard_core::error::{codes, CoreError};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ProjectStatus {
    #[serde(rename = "Planning")]
    #[sqlx(rename = "Planning")]
    Planning,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Parse a wire value, failing with `INVALID_STATUS`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == raw)
            .ok_or_else(|| {
                CoreError::invalid(
                    codes::INVALID_STATUS,
                    "Status must be one of: Planning, In Progress, Completed",
                )
            })
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Planning
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum TaskStatus {
    #[serde(rename = "incomplete")]
    #[sqlx(rename = "incomplete")]
    Incomplete,
    #[serde(rename = "complete")]
    #[sqlx(rename = "complete")]
    Complete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Incomplete, TaskStatus::Complete];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "incomplete",
            TaskStatus::Complete => "complete",
        }
    }

    /// Parse a wire value, failing with `INVALID_STATUS`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == raw)
            .ok_or_else(|| {
                CoreError::invalid(
                    codes::INVALID_STATUS,
                    "Status must be either \"incomplete\" or \"complete\"",
                )
            })
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Incomplete
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
