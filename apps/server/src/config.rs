use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use rent_predictor_core::constants::DEFAULT_CONFIDENCE_SPREAD;
use rent_predictor_core::estimator::{EstimatorSelection, EstimatorSettings, JitterSettings};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL_PATH: &str = "models/gradient_boosting_model.json";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub estimator: EstimatorSettings,
    pub confidence_spread: f64,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            estimator: EstimatorSettings {
                selection: EstimatorSelection::default(),
                model_path: PathBuf::from(DEFAULT_MODEL_PATH),
                heuristic_fallback: false,
                jitter: JitterSettings::default(),
            },
            confidence_spread: DEFAULT_CONFIDENCE_SPREAD,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            log_format: LogFormat::default(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid {}: expected a boolean, got '{}'", key, value),
    }
}

fn parse_log_format(value: &str) -> anyhow::Result<LogFormat> {
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => anyhow::bail!("Invalid RP_LOG_FORMAT: expected 'text' or 'json', got '{}'", value),
    }
}

impl Config {
    /// Reads `RP_*` variables, loading `.env` first when present.
    ///
    /// Recognised variables: `RP_LISTEN_ADDR`, `RP_ESTIMATOR`, `RP_MODEL_PATH`,
    /// `RP_HEURISTIC_FALLBACK`, `RP_JITTER`, `RP_JITTER_SEED`,
    /// `RP_CONFIDENCE_SPREAD`, `RP_CORS_ALLOW_ORIGINS`, `RP_REQUEST_TIMEOUT_MS`
    /// and `RP_LOG_FORMAT`. The log filter itself comes from `RUST_LOG`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = env_var("RP_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid RP_LISTEN_ADDR")?;

        let selection = match env_var("RP_ESTIMATOR") {
            Some(value) => value.parse::<EstimatorSelection>()?,
            None => defaults.estimator.selection,
        };
        let model_path = env_var("RP_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.estimator.model_path);
        let heuristic_fallback = env_var("RP_HEURISTIC_FALLBACK")
            .map(|v| parse_bool("RP_HEURISTIC_FALLBACK", &v))
            .transpose()?
            .unwrap_or(defaults.estimator.heuristic_fallback);
        let jitter = JitterSettings {
            enabled: env_var("RP_JITTER")
                .map(|v| parse_bool("RP_JITTER", &v))
                .transpose()?
                .unwrap_or(false),
            seed: env_var("RP_JITTER_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("Invalid RP_JITTER_SEED")?,
        };

        let confidence_spread = env_var("RP_CONFIDENCE_SPREAD")
            .map(|v| v.parse::<f64>())
            .transpose()
            .context("Invalid RP_CONFIDENCE_SPREAD")?
            .unwrap_or(defaults.confidence_spread);

        let cors_allow = env_var("RP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_var("RP_REQUEST_TIMEOUT_MS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("Invalid RP_REQUEST_TIMEOUT_MS")?
            .unwrap_or(30000);
        let log_format = env_var("RP_LOG_FORMAT")
            .map(|v| parse_log_format(&v))
            .transpose()?
            .unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            estimator: EstimatorSettings {
                selection,
                model_path,
                heuristic_fallback,
                jitter,
            },
            confidence_spread,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
