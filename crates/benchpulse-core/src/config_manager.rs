//! 설정 파일 로드.
//!
//! 시작 시 한 번 읽는다. 파일이 없으면 기본 설정을 써 두고 그 값으로 시작한다.

use crate::config::AppConfig;
use crate::error::CoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE_NAME: &str = "config.json";

const APP_DIR_NAME: &str = "benchpulse";

/// 로드된 설정과 그 파일 위치
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 설정 디렉토리의 `config.json`
    pub fn new() -> Result<Self, CoreError> {
        Self::with_path(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// 지정 경로. 상위 디렉토리가 없으면 만든다.
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        let config = if config_path.exists() {
            read_config(&config_path)?
        } else {
            let config = AppConfig::default_config();
            write_default(&config_path, &config)?;
            config
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 설정 디렉토리
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        let env = |name: &str| {
            std::env::var_os(name)
                .map(PathBuf::from)
                .ok_or_else(|| CoreError::Config(format!("환경 변수 {name} 없음")))
        };

        #[cfg(target_os = "windows")]
        let base = env("APPDATA")?;

        #[cfg(target_os = "macos")]
        let base = env("HOME")?.join("Library").join("Application Support");

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let base = match env("XDG_CONFIG_HOME") {
            Ok(xdg) => xdg,
            Err(_) => env("HOME")?.join(".config"),
        };

        Ok(base.join(APP_DIR_NAME))
    }
}

fn read_config(path: &Path) -> Result<AppConfig, CoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("{} 읽기 실패: {e}", path.display())))?;
    let config = serde_json::from_str(&content)
        .map_err(|e| CoreError::Config(format!("{} 형식 오류: {e}", path.display())))?;
    debug!("설정 로드: {}", path.display());
    Ok(config)
}

fn write_default(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    info!("기본 설정 파일 생성: {}", path.display());
    Ok(())
}
