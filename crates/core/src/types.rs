use std::fmt;

/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The entity kinds exposed by the API.
///
/// Used to build error messages (`Project with id 4 not found`) and the
/// stable `<ENTITY>_NOT_FOUND` error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Task,
    TeamMember,
}

impl EntityKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::Task => "Task",
            EntityKind::TeamMember => "Team member",
        }
    }

    /// Error code emitted when a record of this kind cannot be resolved.
    pub fn not_found_code(self) -> &'static str {
        match self {
            EntityKind::Project => "PROJECT_NOT_FOUND",
            EntityKind::Task => "TASK_NOT_FOUND",
            EntityKind::TeamMember => "TEAM_MEMBER_NOT_FOUND",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
