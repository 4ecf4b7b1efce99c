use serde::Serialize;

use crate::finance::ProjectionResult;

/// 누적 현금흐름 선 그래프용 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub year: u32,
    pub nominal: f64,
    pub discounted: f64,
}

/// 매출 대비 비용 막대 그래프용 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueCostPoint {
    pub year: u32,
    pub revenue: f64,
    /// 운영비(인버터 교체 포함) + 세금
    pub costs_and_taxes: f64,
}

/// 그래프 렌더러가 그대로 쓰는 연도별 시계열.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub cumulative: Vec<CumulativePoint>,
    pub revenue_vs_costs: Vec<RevenueCostPoint>,
}

pub fn chart_series(result: &ProjectionResult) -> ChartSeries {
    let cumulative = result
        .years
        .iter()
        .map(|y| CumulativePoint {
            year: y.year,
            nominal: y.cumulative_cash_flow,
            discounted: y.cumulative_discounted_cash_flow,
        })
        .collect();
    let revenue_vs_costs = result
        .years
        .iter()
        .map(|y| RevenueCostPoint {
            year: y.year,
            revenue: y.revenue,
            costs_and_taxes: y.operational_cost() + y.taxes(),
        })
        .collect();
    ChartSeries {
        cumulative,
        revenue_vs_costs,
    }
}
