use crate::modules::calendar::core::shadow_event::ShadowEvent;

pub fn make_shadow_event(external_id: &str, title: &str, start_time: i64, end_time: i64) -> ShadowEvent {
    ShadowEvent {
        external_id: external_id.to_string(),
        title: title.to_string(),
        description: None,
        start_time,
        end_time,
    }
}
