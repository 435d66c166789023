use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::application::command_handler::{
    TimeEntryCommandHandler, stream_id_of,
};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;
use std::sync::Arc;

#[tokio::test]
async fn lists_time_entries_by_user() {
    let store = Arc::new(InMemoryEventStore::<TimeEntryEvent>::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let projector = Projector {
        name: "time_entry_summary".into(),
        repository: projections.clone(),
        watermark_repository: projections.clone(),
    };
    let handler = TimeEntryCommandHandler::new("time-entries", store, outbox.clone());

    let commands: Vec<_> = [1000, 2000, 1500]
        .into_iter()
        .map(|start| {
            RegisterTimeEntryBuilder::new()
                .time_entry_id(format!("te-{start}"))
                .start_time(start)
                .end_time(start + 60_000)
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let stream_id = stream_id_of(&command.time_entry_id);
        let appended = handler.register(&stream_id, command).await.unwrap();
        projector
            .apply_appended(&stream_id, &appended)
            .await
            .unwrap();
    }

    let list = projections
        .list_by_user_id("user-fixed-0001", 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].start_time >= list[1].start_time);
    assert_eq!(list[0].time_entry_id, commands[1].time_entry_id);
    assert_eq!(list[0].start_time, commands[1].start_time);
    assert_eq!(outbox.pending().await, 3);
}
