use serde::Serialize;

use crate::config::ReportSettings;
use crate::finance::ProjectionResult;

use super::format::{format_currency, format_number, format_payback, format_percent};
use super::ReportError;

pub const REPORT_TITLE: &str = "Financial analysis - distributed solar generation";

/// 주요 지표(표시용 문자열).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub initial_investment: String,
    pub npv: String,
    pub irr: String,
    pub payback: String,
    pub discounted_payback: String,
}

/// 연도별 요약 행(표시용 문자열).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub year: u32,
    pub generation: String,
    pub revenue: String,
    /// 운영비 합계(인버터 교체 포함)
    pub costs: String,
    pub taxes: String,
    pub net_cash_flow: String,
    pub cumulative_cash_flow: String,
}

/// 외부 렌더러(PDF 등)에 넘기는 구조화된 요약 문서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDocument {
    pub title: String,
    pub summary: SummaryMetrics,
    pub cash_flow: Vec<SummaryRow>,
}

impl SummaryDocument {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn summary_document(result: &ProjectionResult, settings: &ReportSettings) -> SummaryDocument {
    let currency = |v: f64| format_currency(v, &settings.currency_symbol);
    SummaryDocument {
        title: REPORT_TITLE.to_string(),
        summary: SummaryMetrics {
            initial_investment: currency(result.initial_investment),
            npv: currency(result.npv),
            irr: format_percent(result.irr_percent()),
            payback: format_payback(result.payback_year),
            discounted_payback: format_payback(result.discounted_payback_year),
        },
        cash_flow: result
            .years
            .iter()
            .map(|y| SummaryRow {
                year: y.year,
                generation: format_number(y.generation, settings.decimals),
                revenue: currency(y.revenue),
                costs: currency(y.operational_cost()),
                taxes: currency(y.taxes()),
                net_cash_flow: currency(y.net_cash_flow),
                cumulative_cash_flow: currency(y.cumulative_cash_flow),
            })
            .collect(),
    }
}
