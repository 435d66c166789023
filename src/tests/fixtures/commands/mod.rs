pub mod register_time_entry;
pub mod update_time_entry;
