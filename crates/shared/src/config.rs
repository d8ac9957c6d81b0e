//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
///
/// This is the global settings layer. Per-note overrides are merged on top of
/// it by `notedrop_core::settings::EffectiveConfig`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Object storage credentials and addressing.
    #[serde(default)]
    pub s3: S3Config,
    /// Upload behaviour.
    #[serde(default)]
    pub upload: UploadConfig,
}

/// S3-compatible object storage configuration.
#[derive(Clone, Deserialize)]
pub struct S3Config {
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Bucket region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Custom endpoint (R2, MinIO, Spaces). AWS is used when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Address the bucket as a path segment instead of a host prefix.
    #[serde(default)]
    pub force_path_style: bool,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            region: default_region(),
            bucket: String::new(),
            endpoint: None,
            force_path_style: false,
        }
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key", &"***")
            .field("secret_key", &"***")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

/// Upload behaviour configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadConfig {
    /// Key prefix inside the bucket.
    #[serde(default)]
    pub folder: String,
    /// Public base URL prepended to the storage key to form the final link.
    #[serde(default)]
    pub image_url_path: String,
    /// Intercept drag-and-drop events as well as pastes.
    #[serde(default)]
    pub upload_on_drag: bool,
    /// Write into the vault instead of the bucket.
    #[serde(default)]
    pub local_upload: bool,
    /// Vault-relative folder for local uploads.
    #[serde(default)]
    pub local_upload_folder: String,
    /// Accept video files.
    #[serde(default)]
    pub upload_video: bool,
    /// Accept audio files.
    #[serde(default)]
    pub upload_audio: bool,
    /// Accept PDF documents.
    #[serde(default)]
    pub upload_pdf: bool,
    /// Upload objects as `public-read` instead of `private`.
    #[serde(default)]
    pub public: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("NOTEDROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
