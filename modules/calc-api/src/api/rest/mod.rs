//! JSON REST boundary: DTOs, handlers, routes, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
