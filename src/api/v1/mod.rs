/*
 * Responsibility
 * - v1 public surface (routes() re-export, handler-facing types)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
