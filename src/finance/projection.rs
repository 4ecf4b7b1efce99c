use serde::Serialize;

use crate::config::ModelSettings;
use crate::input::{CostData, FinancialData, ProjectInput, SystemData, TariffData};

use super::cash_flow::{self, YearlyRecord};
use super::factors;
use super::payback::{self, NO_PAYBACK};
use super::valuation::{self, IrrEstimate};

/// 한 번의 계산 결과. 생성 후에는 읽기 전용으로만 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// 1년차부터 분석 기간까지 연도 순서
    pub years: Vec<YearlyRecord>,
    pub initial_investment: f64,
    pub npv: f64,
    pub irr: IrrEstimate,
    /// 단순 회수 연도, 없으면 -1
    pub payback_year: i32,
    /// 할인 회수 연도, 없으면 -1
    pub discounted_payback_year: i32,
    pub total_revenue: f64,
    pub total_operational_costs: f64,
    pub total_taxes: f64,
}

impl ProjectionResult {
    pub fn irr_percent(&self) -> f64 {
        self.irr.rate_percent
    }

    pub fn simple_payback(&self) -> Option<u32> {
        to_year(self.payback_year)
    }

    pub fn discounted_payback(&self) -> Option<u32> {
        to_year(self.discounted_payback_year)
    }

    pub fn net_cash_flows(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.net_cash_flow).collect()
    }
}

fn to_year(sentinel: i32) -> Option<u32> {
    if sentinel == NO_PAYBACK {
        None
    } else {
        u32::try_from(sentinel).ok()
    }
}

/// 기본 모델 상수(10년차 인버터 교체, 법인세 34%, 단계 탐색 IRR)로 계산한다.
///
/// # Panics
/// `financial.depreciation_years`가 0이면 패닉. 호출 측에서 [`ProjectInput::validate`]로 걸러야 한다.
pub fn compute_projection(
    system: &SystemData,
    cost: &CostData,
    tariff: &TariffData,
    financial: &FinancialData,
) -> ProjectionResult {
    let input = ProjectInput {
        system: system.clone(),
        cost: cost.clone(),
        tariff: tariff.clone(),
        financial: financial.clone(),
    };
    compute_projection_with(&input, &ModelSettings::default())
}

/// 지정한 모델 설정으로 연도별 현금흐름과 투자 지표를 계산한다.
///
/// # Panics
/// `financial.depreciation_years`가 0이면 패닉.
pub fn compute_projection_with(input: &ProjectInput, model: &ModelSettings) -> ProjectionResult {
    assert!(
        input.financial.depreciation_years > 0,
        "depreciation_years must be positive"
    );
    let _span = tracing::debug_span!(
        "projection",
        project_years = input.financial.project_years
    )
    .entered();

    let investment = factors::initial_investment(&input.system, &input.cost);
    let schedule = cash_flow::assemble(input, investment, model);

    let net_flows: Vec<f64> = schedule.records.iter().map(|r| r.net_cash_flow).collect();
    let npv = valuation::npv(&net_flows, input.financial.discount_rate, investment);
    let irr = valuation::irr(&net_flows, investment, &model.irr);

    let cumulative: Vec<f64> = schedule
        .records
        .iter()
        .map(|r| r.cumulative_cash_flow)
        .collect();
    let cumulative_discounted: Vec<f64> = schedule
        .records
        .iter()
        .map(|r| r.cumulative_discounted_cash_flow)
        .collect();
    let payback_year = payback::find_payback_year(&cumulative);
    let discounted_payback_year = payback::find_payback_year(&cumulative_discounted);

    tracing::debug!(
        investment,
        npv,
        irr = irr.rate_percent,
        payback_year,
        discounted_payback_year,
        "투자 분석 완료"
    );

    ProjectionResult {
        years: schedule.records,
        initial_investment: investment,
        npv,
        irr,
        payback_year,
        discounted_payback_year,
        total_revenue: schedule.total_revenue,
        total_operational_costs: schedule.total_operational_costs,
        total_taxes: schedule.total_taxes,
    }
}
