/*
 * Responsibility
 * - process-level services injected into AppState (token verification)
 */
pub mod auth;
