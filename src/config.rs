use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// IRR 탐색 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrMethod {
    /// 10%에서 시작해 보폭을 줄여가며 한 방향으로 찾는 방식. 기본값.
    #[default]
    SteppedSearch,
    /// 하한/상한 구간에서 Brent 방식으로 근을 찾는다. 구간에 부호 변화가 없으면 단계 탐색으로 대체한다.
    Brent,
}

/// IRR 탐색 설정. 비율 값은 모두 % 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrSettings {
    pub method: IrrMethod,
    pub initial_guess_percent: f64,
    pub initial_step_percent: f64,
    /// NPV 절대 허용오차 [통화]
    pub tolerance: f64,
    pub max_iterations: u32,
    /// Brent 탐색 구간 하한
    pub lower_bound_percent: f64,
    /// Brent 탐색 구간 상한
    pub upper_bound_percent: f64,
}

impl Default for IrrSettings {
    fn default() -> Self {
        Self {
            method: IrrMethod::SteppedSearch,
            initial_guess_percent: 10.0,
            initial_step_percent: 10.0,
            tolerance: 1e-6,
            max_iterations: 1000,
            lower_bound_percent: -90.0,
            upper_bound_percent: 1000.0,
        }
    }
}

/// 모델 상수. 기본값은 고정 상수(10년차 인버터 교체, 법인세 34%)와 같다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// 인버터 교체 연도
    pub inverter_replacement_year: u32,
    /// 감가상각 절세 효과에 쓰는 법인세율 [%]
    pub corporate_tax_rate_percent: f64,
    pub irr: IrrSettings,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            inverter_replacement_year: 10,
            corporate_tax_rate_percent: 34.0,
            irr: IrrSettings::default(),
        }
    }
}

/// 보고서 출력 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// CSV 구분자
    pub delimiter: char,
    /// 연도별 수치 소수 자릿수
    pub decimals: usize,
    pub currency_symbol: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            delimiter: ';',
            decimals: 2,
            currency_symbol: "R$".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelSettings,
    pub report: ReportSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "기본 설정 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
