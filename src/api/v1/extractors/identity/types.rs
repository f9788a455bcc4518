/*
 * Responsibility
 * - The per-request identity slot
 * - Extensions are keyed by type, so each identity shape gets its own slot
 */

/// Identity resolved by the access gate. Written at most once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity<I>(pub I);
