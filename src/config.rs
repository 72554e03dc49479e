use serde::Deserialize;

const ENV_PREFIX: &str = "WILDLIFE_ID";
const MIN_BODY_BYTES: usize = 1024;
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentifyConfig {
    pub min_confidence: u8,
    pub max_confidence: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allow_any_origin: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecurityConfig {
    pub enable_hsts: Option<bool>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub csp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub identify: IdentifyConfig,
    pub cors: CorsConfig,
    pub security: Option<SecurityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        // The embedded defaults ship with the binary; failing to parse them is a build defect.
        match from_toml_str(DEFAULTS) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

const DEFAULTS: &str = include_str!("../config/default.toml");

/// Loads the configuration: embedded defaults -> wildlife-id.toml -> $WILDLIFE_ID_CONFIG -> env.
pub fn load() -> anyhow::Result<AppConfig> {
    let _ = dotenvy::dotenv();
    load_with_prefix(ENV_PREFIX)
}

pub(crate) fn load_with_prefix(prefix: &str) -> anyhow::Result<AppConfig> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::with_name("wildlife-id").required(false));

    if let Ok(custom_path) = std::env::var(format!("{}_CONFIG", prefix)) {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    builder = builder.add_source(
        ::config::Environment::with_prefix(prefix).prefix_separator("__").separator("__").try_parsing(true),
    );

    let app_cfg: AppConfig = builder.build()?.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Parses a full TOML document layered over the embedded defaults.
pub fn from_toml_str(content: &str) -> anyhow::Result<AppConfig> {
    let cfg = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::from_str(content, ::config::FileFormat::Toml))
        .build()?;
    Ok(cfg.try_deserialize()?)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }
    if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&cfg.server.max_body_bytes) {
        return Err(anyhow::anyhow!(
            "server.max_body_bytes must be in {}..={}",
            MIN_BODY_BYTES,
            MAX_BODY_BYTES
        ));
    }

    let id = &cfg.identify;
    if id.min_confidence > id.max_confidence {
        return Err(anyhow::anyhow!("identify.min_confidence must be <= identify.max_confidence"));
    }
    if id.max_confidence > 100 {
        return Err(anyhow::anyhow!("identify.max_confidence must be <= 100"));
    }

    Ok(())
}
