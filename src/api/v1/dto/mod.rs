pub mod identity;

pub use identity::UserIdentity;
