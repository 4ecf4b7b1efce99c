use serde::Serialize;

use crate::config::ModelSettings;
use crate::input::ProjectInput;

use super::factors;

/// 한 해의 현금흐름 기록. 금액은 모두 통화 단위.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyRecord {
    pub year: u32,
    /// 감소율이 반영된 발전량 [MWh]
    pub generation: f64,
    pub revenue: f64,
    pub om_cost: f64,
    pub insurance_cost: f64,
    pub adm_cost: f64,
    pub rent_cost: f64,
    pub inverter_cost: f64,
    pub taxes_icms: f64,
    pub taxes_pis_cofins: f64,
    pub depreciation: f64,
    pub tax_benefit: f64,
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
    pub discounted_cash_flow: f64,
    pub cumulative_discounted_cash_flow: f64,
}

impl YearlyRecord {
    /// O&M + 보험 + 관리비 + 임대료 + 인버터 교체비
    pub fn operational_cost(&self) -> f64 {
        self.om_cost + self.insurance_cost + self.adm_cost + self.rent_cost + self.inverter_cost
    }

    pub fn taxes(&self) -> f64 {
        self.taxes_icms + self.taxes_pis_cofins
    }
}

/// 연도별 기록과 누계.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSchedule {
    pub records: Vec<YearlyRecord>,
    pub total_revenue: f64,
    pub total_operational_costs: f64,
    pub total_taxes: f64,
}

/// `(1 + rate/100)^year` 할인 계수.
pub fn discount_factor(rate_percent: f64, year: u32) -> f64 {
    (1.0 + rate_percent / 100.0).powi(year as i32)
}

/// 1년차부터 분석 기간까지 순서대로 연도별 현금흐름을 조립한다.
///
/// 누적 현금흐름(명목/할인)은 모두 `-investment`에서 출발한다.
pub fn assemble(input: &ProjectInput, investment: f64, model: &ModelSettings) -> CashFlowSchedule {
    let ProjectInput {
        system,
        cost,
        tariff,
        financial,
    } = input;

    let mut records = Vec::with_capacity(financial.project_years as usize);
    let mut cumulative = -investment;
    let mut cumulative_discounted = -investment;
    let mut total_revenue = 0.0;
    let mut total_operational_costs = 0.0;
    let mut total_taxes = 0.0;

    for year in 1..=financial.project_years {
        let generation = factors::degraded_generation(
            system.annual_generation_mwh,
            financial.annual_degradation,
            year,
        );
        let revenue = factors::revenue(generation, system.contracted_demand_kw, tariff).total();

        let om_cost = factors::om_cost(investment, cost.om_percent);
        let insurance_cost = factors::insurance_cost(investment, cost.insurance_percent);
        let adm_cost = factors::adm_cost(revenue, cost.adm_percent);
        let rent_cost = factors::rent_cost(cost.rent_monthly, financial.adjustment_rate, year);
        let inverter_cost = factors::inverter_cost(
            investment,
            cost.inverter_replace_percent,
            year,
            model.inverter_replacement_year,
        );
        let taxes = factors::taxes(revenue, tariff);
        let depreciation = factors::depreciation(investment, financial.depreciation_years);
        let tax_benefit = factors::depreciation_tax_benefit(
            investment,
            financial.depreciation_years,
            year,
            model.corporate_tax_rate_percent,
        );

        let net_cash_flow = revenue
            - om_cost
            - insurance_cost
            - adm_cost
            - rent_cost
            - inverter_cost
            - taxes.icms
            - taxes.pis_cofins
            + tax_benefit;
        cumulative += net_cash_flow;

        let discounted_cash_flow = net_cash_flow / discount_factor(financial.discount_rate, year);
        cumulative_discounted += discounted_cash_flow;

        let record = YearlyRecord {
            year,
            generation,
            revenue,
            om_cost,
            insurance_cost,
            adm_cost,
            rent_cost,
            inverter_cost,
            taxes_icms: taxes.icms,
            taxes_pis_cofins: taxes.pis_cofins,
            depreciation,
            tax_benefit,
            net_cash_flow,
            cumulative_cash_flow: cumulative,
            discounted_cash_flow,
            cumulative_discounted_cash_flow: cumulative_discounted,
        };
        total_revenue += record.revenue;
        total_operational_costs += record.operational_cost();
        total_taxes += record.taxes();
        records.push(record);
    }

    CashFlowSchedule {
        records,
        total_revenue,
        total_operational_costs,
        total_taxes,
    }
}
