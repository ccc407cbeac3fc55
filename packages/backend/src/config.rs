use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_QA_MATCH_CUTOFF: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub quiz_dir: PathBuf,
    pub reference_data_path: Option<PathBuf>,
    pub recommender_seed: Option<u64>,
    pub qa_match_cutoff: f64,
    /// Directory for daily-rolling log files; `None` keeps logs on stdout only
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            log_level: "info".to_string(),
            quiz_dir: PathBuf::from("./data"),
            reference_data_path: None,
            recommender_seed: None,
            qa_match_cutoff: DEFAULT_QA_MATCH_CUTOFF,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let quiz_dir = non_empty_env("QUIZ_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.quiz_dir);

        let reference_data_path = non_empty_env("REFERENCE_DATA_PATH").map(PathBuf::from);

        let recommender_seed = non_empty_env("RECOMMENDER_SEED").and_then(|value| value.parse::<u64>().ok());

        let qa_match_cutoff = non_empty_env("QA_MATCH_CUTOFF")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, 1.0))
            .unwrap_or(defaults.qa_match_cutoff);

        let log_dir = env_bool("ENABLE_FILE_LOGS")
            .unwrap_or(false)
            .then(|| non_empty_env("LOG_DIR").unwrap_or_else(|| "./logs".to_string()))
            .map(PathBuf::from);

        Self {
            host,
            port,
            log_level,
            quiz_dir,
            reference_data_path,
            recommender_seed,
            qa_match_cutoff,
            log_dir,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    let normalized = non_empty_env(key)?.to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
