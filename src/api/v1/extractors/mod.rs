pub mod identity;

pub use identity::{Authenticated, Identity};
