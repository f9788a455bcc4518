/// Factory: build the process-wide `JwtAuthentication` from application `Config`.
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::services::auth::JwtAuthentication;

pub fn build_jwt_authentication<I>(config: &Config) -> Arc<JwtAuthentication<I>>
where
    I: DeserializeOwned + Clone,
{
    Arc::new(JwtAuthentication::new(&config.signing))
}
