pub mod domain_event;
pub mod time_entry_registered_v1;
