use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("SERVER_URL").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}
