use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::tests::fixtures::events::time_entry_registered_v1::make_time_entry_registered_v1_event;

pub fn registered_state() -> TimeEntryState {
    evolve(
        TimeEntryState::None,
        TimeEntryEvent::TimeEntryRegisteredV1(make_time_entry_registered_v1_event()),
    )
}

pub fn deleted_state() -> TimeEntryState {
    evolve(
        registered_state(),
        TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
            time_entry_id: "te-fixed-0001".into(),
            deleted_at: 1_700_001_000_000,
            deleted_by: "user-fixed-0001".into(),
        }),
    )
}
