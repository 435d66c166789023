use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent {
    pub name: &'static str,
}
