use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::field::LoanField;
use crate::normalize::RangeSpec;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 원금 범위 기본값 [₹].
pub const PRINCIPAL_RANGE: RangeSpec = RangeSpec::new(0.0, 100_000_000.0, 20_000.0, 10_000_000.0);
/// 상환 기간 범위 기본값 [년].
pub const TENURE_RANGE: RangeSpec = RangeSpec::new(0.0, 10.0, 1.0, 7.0);
/// 연 이율 범위 기본값 [%].
pub const RATE_RANGE: RangeSpec = RangeSpec::new(5.0, 15.0, 0.1, 8.5);

/// 텍스트 입력 디바운스 대기 시간 기본값 [ms].
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// 입력 항목별 범위 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSet {
    pub principal: RangeSpec,
    pub tenure: RangeSpec,
    pub rate: RangeSpec,
}

impl Default for RangeSet {
    fn default() -> Self {
        Self {
            principal: PRINCIPAL_RANGE,
            tenure: TENURE_RANGE,
            rate: RATE_RANGE,
        }
    }
}

impl RangeSet {
    /// 각 범위가 성립하는지 확인한다(min ≤ default ≤ max, step > 0).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in LoanField::ALL {
            let spec = field.range(self);
            let ok = spec.min.is_finite()
                && spec.max.is_finite()
                && spec.min <= spec.max
                && spec.step > 0.0
                && spec.default_value >= spec.min
                && spec.default_value <= spec.max;
            if !ok {
                return Err(ConfigError::InvalidRange {
                    field: field.label_key(),
                    spec,
                });
            }
        }
        Ok(())
    }
}

/// 애플리케이션 설정을 표현한다. 파일은 읽기만 하고 다시 쓰지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en-in/en-us/ko-kr)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// GUI 창 불투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 텍스트 입력 디바운스 대기 시간 [ms]
    pub debounce_ms: u64,
    pub ranges: RangeSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            window_alpha: 1.0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            ranges: RangeSet::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// 범위 설정 오류
    #[error("잘못된 범위 설정({field}): {spec:?}")]
    InvalidRange {
        field: &'static str,
        spec: RangeSpec,
    },
}

/// config.toml이 있으면 읽고, 없으면 기본 설정을 돌려준다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from_path(path)
    } else {
        tracing::debug!("{CONFIG_FILE} not found, using defaults");
        Ok(Config::default())
    }
}

/// 지정한 경로의 설정 파일을 읽고 검증한다.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg = parse_config(&content)?;
    tracing::info!(path = %path.display(), language = %cfg.language, "config loaded");
    Ok(cfg)
}

/// TOML 문자열을 설정으로 해석하고 범위를 검증한다. 빠진 항목은 기본값을 쓴다.
pub fn parse_config(src: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(src)?;
    cfg.ranges.validate()?;
    Ok(cfg)
}
