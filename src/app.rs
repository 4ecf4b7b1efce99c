use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{self, Config, ConfigError};
use crate::finance::{compute_projection_with, ProjectionResult};
use crate::input::{InputError, ProjectInput};
use crate::report::{self, ReportError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("시나리오 파싱 오류: {0}")]
    Scenario(#[from] toml::de::Error),
    #[error("시나리오 직렬화 오류: {0}")]
    ScenarioSerialize(#[from] toml::ser::Error),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("보고서 오류: {0}")]
    Report(#[from] ReportError),
}

/// `run` 명령 옵션.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub scenario: PathBuf,
    pub config: PathBuf,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub yearly: bool,
}

/// 시나리오 TOML 파일을 읽는다. 누락된 필드는 0으로 채워진다.
pub fn load_scenario(path: &Path) -> Result<ProjectInput, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 시나리오를 검증하고 계산한 뒤 결과를 출력/저장한다.
pub fn run(opts: &RunOptions) -> Result<ProjectionResult, AppError> {
    let cfg = config::load_or_default(&opts.config)?;
    let input = load_scenario(&opts.scenario)?;
    input.validate()?;
    tracing::info!(scenario = %opts.scenario.display(), "시나리오 계산 시작");

    let result = compute_projection_with(&input, &cfg.model);
    ui_cli::print_summary(&result, &cfg.report);
    if opts.yearly {
        ui_cli::print_yearly_table(&result);
    }

    if let Some(path) = &opts.csv {
        let file = BufWriter::new(File::create(path)?);
        report::write_csv(&result, &cfg.report, file)?;
        tracing::info!(path = %path.display(), "CSV 저장");
    }
    if let Some(path) = &opts.json {
        let doc = report::summary_document(&result, &cfg.report);
        fs::write(path, doc.to_json()?)?;
        tracing::info!(path = %path.display(), "요약 문서 저장");
    }
    Ok(result)
}

/// 기준 시나리오를 TOML 문자열로 만든다.
pub fn scenario_template() -> Result<String, AppError> {
    Ok(toml::to_string_pretty(&ProjectInput::reference_case())?)
}

/// 기본 설정 파일을 쓴다.
pub fn init_config(path: &Path) -> Result<(), AppError> {
    Config::default().save(path)?;
    tracing::info!(path = %path.display(), "기본 설정 저장");
    Ok(())
}
