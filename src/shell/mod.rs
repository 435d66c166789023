// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and the HTTP/GraphQL surface.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
