//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "ITEMCHECK";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ITEMCHECK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `ITEMCHECK_SERVER__PORT=9000`
/// - `ITEMCHECK_CHECK__LATENCY_MS=0`
/// - `ITEMCHECK_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8787)?
        .set_default("server.max_body_bytes", 2 * 1024 * 1024)?
        .set_default("check.latency_ms", 50)?
        .set_default("check.active_prefix", "prod-")?
        .set_default("check.inactive_prefix", "old-")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    config
        .check
        .prefix_rules()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Simulated Latency: {}ms", config.check.latency_ms);
    tracing::info!("Active Prefix: {:?}", config.check.active_prefix);
    tracing::info!("Inactive Prefix: {:?}", config.check.inactive_prefix);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    /// 环境变量是进程级共享的，读取配置的测试需要串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_body_limit() {
        let mut config = AppConfig::default();
        config.server.max_body_bytes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_prefix() {
        let mut config = AppConfig::default();
        config.check.active_prefix = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.check.inactive_prefix = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let _guard = env_guard();
        let file = toml_file(
            "[server]\nport = 9001\n\n[check]\nlatency_ms = 0\nactive_prefix = \"live-\"",
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.check.latency_ms, 0);
        assert_eq!(config.check.active_prefix, "live-");
        assert_eq!(config.check.inactive_prefix, "old-");
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let _guard = env_guard();
        let file = toml_file("[check]\ninactive_prefix = \"\"");

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let _guard = env_guard();
        let result = load_config_from_path(Some(Path::new("/nonexistent/itemcheck.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let _guard = env_guard();
        let file = toml_file(
            "[server]\nport = 9001\n\n[check]\nlatency_ms = 7\nactive_prefix = \"live-\"",
        );

        std::env::set_var("ITEMCHECK_CHECK__ACTIVE_PREFIX", "hot-");
        std::env::set_var("ITEMCHECK_SERVER__PORT", "9123");
        let result = load_config_from_path(Some(file.path()));
        std::env::remove_var("ITEMCHECK_CHECK__ACTIVE_PREFIX");
        std::env::remove_var("ITEMCHECK_SERVER__PORT");

        let config = result.unwrap();
        assert_eq!(config.check.active_prefix, "hot-");
        assert_eq!(config.server.port, 9123);
        // 未被环境变量覆盖的键仍取自文件或默认值
        assert_eq!(config.check.latency_ms, 7);
        assert_eq!(config.check.inactive_prefix, "old-");
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
