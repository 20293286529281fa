use std::sync::Arc;

use coursebyte_config::{CorsConfig, DatabaseConfig, JwtConfig};
use coursebyte_db::{CourseStore, StoreError, connect_store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CourseStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn CourseStore>, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
        }
    }
}

pub async fn init_app_state(database: &DatabaseConfig) -> Result<AppState, StoreError> {
    Ok(AppState::new(
        connect_store(database).await?,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
