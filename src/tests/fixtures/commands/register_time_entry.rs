// Shared test fixture for the RegisterTimeEntry command.

use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTimeEntryDto {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub billable: bool,
    pub description: String,
}

pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_time_entry.json")
                .unwrap();
        let dto: RegisterTimeEntryDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterTimeEntry {
                time_entry_id: dto.time_entry_id,
                user_id: dto.user_id,
                project_id: dto.project_id,
                task_id: dto.task_id,
                start_time: dto.start_time,
                end_time: dto.end_time,
                billable: dto.billable,
                description: dto.description,
                created_by: "user-fixed-0001".to_string(),
                created_at: 1700000000000,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: i64) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_register_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterTimeEntryBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.project_id, "project-fixed-0001");
        assert_eq!(built.start_time, 1700000000000);
        assert_eq!(built.end_time, 1700000360000);
        assert!(built.billable);
        assert_eq!(built.description, "This is a test");
        assert_eq!(built.created_by, "user-fixed-0001");
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = RegisterTimeEntryBuilder::new()
            .time_entry_id("tid-123")
            .user_id("uid-456")
            .project_id("pid-789")
            .start_time(1111)
            .end_time(2222)
            .description("desc")
            .build();

        assert_eq!(custom.time_entry_id, "tid-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.project_id, "pid-789");
        assert_eq!(custom.start_time, 1111);
        assert_eq!(custom.end_time, 2222);
        assert_eq!(custom.description, "desc");
    }
}
