use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend, served as the router fallback
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Upper bound for the multipart body, in megabytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    pub upstream_url: String,
    /// No timeout when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_max_upload_mb() -> usize {
    50
}

impl ServerConfig {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"
max_upload_mb = 50

[analysis]
upstream_url = "http://127.0.0.1:5000/api/analyze"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.analysis.upstream_url.trim().is_empty() {
        anyhow::bail!("analysis.upstream_url must not be empty");
    }
    Ok(config)
}

/// Resolves `server.static_dir`; relative paths are taken from the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // cargo run from the workspace root
    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.server.max_upload_bytes(), 50 * 1024 * 1024);
        assert_eq!(
            config.analysis.upstream_url,
            "http://127.0.0.1:5000/api/analyze"
        );
        assert_eq!(config.analysis.timeout_secs, None);
    }

    #[test]
    fn test_server_section_defaults() {
        let config = parse_config(
            r#"
            [server]

            [analysis]
            upstream_url = "http://analysis.local/api/analyze"
            timeout_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_mb, 50);
        assert_eq!(config.analysis.timeout_secs, Some(120));
    }

    #[test]
    fn test_empty_upstream_is_rejected() {
        let result = parse_config(
            r#"
            [server]
            [analysis]
            upstream_url = "  "
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_static_dir_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("job-scribe-dist");
        config.server.static_dir = abs.display().to_string();
        assert_eq!(get_static_dir(&config), abs);
    }
}
