use crate::modules::time_entries::core::events::TimeEntryEvent;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
pub enum TimeEntryIntent {
    Publish { event: TimeEntryEvent },
}
