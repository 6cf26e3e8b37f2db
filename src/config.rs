/// 特效调参配置
///
/// 提供 TOML 配置文件加载与校验；所有字段都有默认值，
/// 缺省配置即默认演出行为。
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 特效主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// 最大粒子数
    #[serde(default = "default_max_particles")]
    pub max_particles: usize,

    /// 随机种子（None = 熵源种子）
    #[serde(default)]
    pub seed: Option<u64>,

    /// 镜头抖动配置
    #[serde(default)]
    pub camera: CameraShakeConfig,
}

fn default_max_particles() -> usize {
    500
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            max_particles: default_max_particles(),
            seed: None,
            camera: CameraShakeConfig::default(),
        }
    }
}

/// 镜头抖动配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraShakeConfig {
    /// 触发强度
    #[serde(default = "default_shake_intensity")]
    pub intensity: f32,
    /// 每次更新的几何衰减系数
    #[serde(default = "default_shake_decay")]
    pub decay: f32,
}

fn default_shake_intensity() -> f32 {
    0.15
}

fn default_shake_decay() -> f32 {
    0.95
}

impl Default for CameraShakeConfig {
    fn default() -> Self {
        Self {
            intensity: default_shake_intensity(),
            decay: default_shake_decay(),
        }
    }
}

impl EffectsConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_particles == 0 {
            return Err(ConfigError::ValidationError(
                "max_particles must be greater than 0".to_string(),
            ));
        }
        if self.camera.intensity < 0.0 {
            return Err(ConfigError::ValidationError(
                "camera.intensity must be non-negative".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.camera.decay) {
            return Err(ConfigError::ValidationError(
                "camera.decay must be in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }
}
