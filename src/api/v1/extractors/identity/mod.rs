/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - Identity<I>: the slot the access gate writes into request extensions
 * - Authenticated<I>: hands that identity to handlers without re-validating
 */

mod core;
mod types;

pub use self::core::Authenticated;
pub use self::types::Identity;
