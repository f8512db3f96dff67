use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use super::environment::Environment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub extraction: ExtractionSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub pdf: PdfExtractionSettings,
    pub ocr: OcrSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExtractionSettings {
    pub timeout_secs: u64,
}

/// Engine location and time bounds. The recognition profile itself is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSettings {
    pub tesseract_path: String,
    pub timeout_secs: u64,
    pub probe_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Verbosity of this service and its HTTP layer. Other crates stay at `info`.
    pub level: String,
    pub enable_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
                max_upload_mb: 25,
            },
            storage: StorageSettings {
                upload_dir: "./uploads".to_string(),
            },
            extraction: ExtractionSettings {
                pdf: PdfExtractionSettings { timeout_secs: 30 },
                ocr: OcrSettings {
                    tesseract_path: "tesseract".to_string(),
                    timeout_secs: 60,
                    probe_timeout_secs: 10,
                },
            },
            llm: LlmSettings {
                api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
                model: "gemini-1.5-pro".to_string(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                timeout_secs: 60,
            },
            logging: LoggingSettings {
                level: "debug".to_string(),
                enable_json: false,
            },
        }
    }
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
