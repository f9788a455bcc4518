/*
 * Responsibility
 * - middleware public interface (re-export)
 * - http::apply (cross-cutting), auth::{token, access, router} (access token gate)
 */
pub mod auth;
pub mod http;
