pub mod factory;
pub mod jwt;
pub mod signing;

pub use factory::build_jwt_authentication;
pub use jwt::JwtAuthentication;
pub use signing::SigningConfig;
