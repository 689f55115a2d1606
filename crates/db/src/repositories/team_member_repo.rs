//! Repository for the `team_members` table.

use chrono::Utc;
use sqlx::SqlitePool;
use taskboard_core::search::like_pattern;
use taskboard_core::types::DbId;

use crate::models::team_member::{
    CreateTeamMember, TeamMember, TeamMemberListFilter, TeamMemberWithTaskCount, UpdateTeamMember,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role, created_at";

/// Same columns qualified with the `m` alias plus the assigned task count.
const COUNTED_COLUMNS: &str = "m.id, m.name, m.email, m.role, m.created_at, \
    (SELECT COUNT(*) FROM tasks t WHERE t.assigned_to = m.id) AS task_count";

/// Shared search predicate over name and email (`?1` is the LIKE pattern).
const SEARCH_PREDICATE: &str = "(?1 IS NULL \
    OR LOWER(name) LIKE ?1 ESCAPE '\\' \
    OR LOWER(email) LIKE ?1 ESCAPE '\\')";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// Insert a new team member, returning the created row.
    ///
    /// A concurrent insert of the same email surfaces as a unique-constraint
    /// violation (see [`crate::is_unique_violation`]).
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, email, role, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a team member by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = ?1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a team member by ID together with their assigned task count.
    pub async fn find_with_task_count(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TeamMemberWithTaskCount>, sqlx::Error> {
        let query = format!("SELECT {COUNTED_COLUMNS} FROM team_members m WHERE m.id = ?1");
        sqlx::query_as::<_, TeamMemberWithTaskCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a team member with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM team_members WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// Whether `email` (already normalized) belongs to a member other than
    /// `exclude_id`.
    pub async fn email_taken(
        pool: &SqlitePool,
        email: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as(
            "SELECT 1 FROM team_members WHERE email = ?1 AND (?2 IS NULL OR id <> ?2)",
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }

    /// List team members newest first with optional search.
    pub async fn list(
        pool: &SqlitePool,
        filter: &TeamMemberListFilter,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(like_pattern);
        let query = format!(
            "SELECT {COLUMNS} FROM team_members
             WHERE {SEARCH_PREDICATE}
             ORDER BY created_at DESC, id DESC
             LIMIT ?2 OFFSET ?3"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(pattern)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Same as [`TeamMemberRepo::list`] with each member's task count.
    pub async fn list_with_task_counts(
        pool: &SqlitePool,
        filter: &TeamMemberListFilter,
    ) -> Result<Vec<TeamMemberWithTaskCount>, sqlx::Error> {
        let pattern = filter.search.as_deref().and_then(like_pattern);
        let query = format!(
            "SELECT {COUNTED_COLUMNS} FROM team_members m
             WHERE {SEARCH_PREDICATE}
             ORDER BY m.created_at DESC, m.id DESC
             LIMIT ?2 OFFSET ?3"
        );
        sqlx::query_as::<_, TeamMemberWithTaskCount>(&query)
            .bind(pattern)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Update a team member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = COALESCE(?2, name),
                email = COALESCE(?3, email),
                role = CASE WHEN ?4 THEN ?5 ELSE role END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.role.is_some())
            .bind(input.role.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member, returning the removed row. Their tasks are
    /// unassigned by the `ON DELETE SET NULL` foreign key.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("DELETE FROM team_members WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
