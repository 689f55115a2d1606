//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` request payload as it arrives over the wire
//! - A typed create/update command produced by the payload's `validate()`

pub mod analytics;
pub mod project;
pub mod status;
pub mod task;
pub mod team_member;
