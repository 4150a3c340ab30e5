//! API surface: REST routes, problem responses, and the HTML form page.

pub mod problem;
pub mod rest;
pub mod web;
