use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::conversion::IdentityPolicy;
use crate::session::{DEFAULT_HISTORY_LIMIT, DEFAULT_PRECISION};

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "ko", "en" 등
    pub language: String,
    /// 히스토리 보관 개수 (0 = 무제한)
    pub history_limit: usize,
    /// 결과 표시 소수 자릿수
    pub precision: usize,
    pub identity_policy: IdentityPolicy,
    pub default_category: String,
    pub default_from: String,
    pub default_to: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            precision: DEFAULT_PRECISION,
            identity_policy: IdentityPolicy::ShortCircuit,
            default_category: "Length".to_string(),
            default_from: "Meter".to_string(),
            default_to: "Centimeter".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 아무것도 쓰지 않고 기본 설정을 돌려준다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load(path)
    } else {
        let cfg = Config::default();
        if let Err(e) = cfg.save(path) {
            // 읽기 전용 디렉터리에서도 기본값으로 실행은 계속한다
            warn!(path = %path.display(), error = %e, "could not write default config");
        }
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}
