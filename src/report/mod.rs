//! 계산 결과를 읽기 전용으로 소비하는 출력 모듈(그래프 시계열, CSV, 요약 문서).

pub mod chart;
pub mod csv_export;
pub mod format;
pub mod summary;

use thiserror::Error;

pub use chart::{chart_series, ChartSeries};
pub use csv_export::{csv_string, write_csv};
pub use summary::{summary_document, SummaryDocument};

/// 보고서 생성 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV 작성 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("UTF-8 변환 오류: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("ASCII 문자만 구분자로 사용할 수 있습니다: {0:?}")]
    Delimiter(char),
}
