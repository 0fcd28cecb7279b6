use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub listen_addr: String,
}

impl AppConfig {
    const DEFAULT_LISTEN_ADDR: &'static str = "0.0.0.0:8080";

    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = env::var("RESEARCH_LISTEN_ADDR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self { listen_addr })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}
