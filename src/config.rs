use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub sample_files_dir: PathBuf,
    pub llm_provider: String,
    pub llm_model: String,
    pub default_temperature: f32,
    pub default_max_tokens: u32,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub session_idle_ttl_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("APP_PORT must be a number"),
            environment: env::var("APP_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            sample_files_dir: env::var("SAMPLE_FILES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("files")),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "mock".to_string()),
            default_temperature: env::var("DEFAULT_TEMPERATURE")
                .unwrap_or_else(|_| "0.3".to_string())
                .parse()
                .expect("DEFAULT_TEMPERATURE must be a number"),
            default_max_tokens: env::var("DEFAULT_MAX_TOKENS")
                .unwrap_or_else(|_| "1024".to_string())
                .parse()
                .expect("DEFAULT_MAX_TOKENS must be a number"),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number"),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "52428800".to_string())
                .parse()
                .expect("MAX_UPLOAD_BYTES must be a number"),
            session_idle_ttl_secs: env::var("SESSION_IDLE_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .expect("SESSION_IDLE_TTL_SECS must be a number"),
            session_sweep_interval_secs: env::var("SESSION_SWEEP_INTERVAL_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("SESSION_SWEEP_INTERVAL_SECS must be a number"),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "statement-analysis-assistant".to_string()),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            sample_files_dir: PathBuf::from("files"),
            llm_provider: "mock".to_string(),
            llm_model: "mock".to_string(),
            default_temperature: 0.3,
            default_max_tokens: 1024,
            request_timeout_secs: 300,
            max_upload_bytes: 50 * 1024 * 1024,
            session_idle_ttl_secs: 3600,
            session_sweep_interval_secs: 60,
            otel_service_name: "statement-analysis-assistant".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        }
    }
}
