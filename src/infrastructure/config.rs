use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    #[serde(default = "default_upstream_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_upstream_url() -> String {
    "https://services.swpc.noaa.gov/json/goes/primary/xrays-1-minute.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_ttl_secs() -> u64 {
    60
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("SOLAR").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str("", FileFormat::Toml))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert!(config.upstream.url.contains("swpc.noaa.gov"));
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let toml = r#"
            [upstream]
            timeout_secs = 5

            [cache]
            ttl_secs = 300
        "#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.cache.ttl_secs, 300);
        assert!(config.upstream.url.contains("xrays-1-minute"));
    }
}
