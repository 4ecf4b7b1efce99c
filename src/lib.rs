//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 보고서/그래프 소비자도 같은 결과를 쓰게 한다.

pub mod app;
pub mod config;
pub mod finance;
pub mod input;
pub mod report;
pub mod ui_cli;

pub use finance::{compute_projection, compute_projection_with, ProjectionResult, YearlyRecord};
pub use input::{AdjustmentType, CostData, FinancialData, ProjectInput, SystemData, TariffData};
