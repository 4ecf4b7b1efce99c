//! 연도별 물리량/재무 항목 계산 함수 모음.
//!
//! 모든 함수는 연도와 불변 입력값만으로 결정되는 순수 함수다.
//! 비율 인자는 % 단위(예: 0.5 = 0.5%)로 받는다.

use crate::input::{CostData, SystemData, TariffData};

const MONTHS_PER_YEAR: f64 = 12.0;
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// 초기 투자비를 계산한다. 총액이 0이 아닌 값으로 주어지면 그대로, 아니면 와트당 단가 × 용량.
pub fn initial_investment(system: &SystemData, cost: &CostData) -> f64 {
    match cost.capex_total {
        Some(total) if total != 0.0 => total,
        _ => cost.capex_per_wp * system.power_kwp * WATTS_PER_KILOWATT,
    }
}

/// 감소율이 기하급수적으로 누적된 연간 발전량 [MWh]. 1년차에도 1년치 감소가 반영된다.
pub fn degraded_generation(base_generation: f64, degradation_percent: f64, year: u32) -> f64 {
    base_generation * (1.0 - degradation_percent / 100.0).powi(year as i32)
}

/// 연간 매출 구성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Revenue {
    /// 에너지 매출 = 발전량 × (TE + TUSD)
    pub energy: f64,
    /// 수요 요금 매출(연 환산). 연도와 무관하게 일정하다.
    pub demand: f64,
}

impl Revenue {
    pub fn total(&self) -> f64 {
        self.energy + self.demand
    }
}

/// 발전량과 요금으로 연간 매출을 계산한다.
pub fn revenue(generation_mwh: f64, contracted_demand_kw: f64, tariff: &TariffData) -> Revenue {
    Revenue {
        energy: generation_mwh * (tariff.energy_tariff + tariff.tusd),
        demand: contracted_demand_kw
            * (tariff.tusdg_demand + tariff.tusdc_demand)
            * MONTHS_PER_YEAR,
    }
}

/// 투자비 대비 O&M 비용.
pub fn om_cost(investment: f64, om_percent: f64) -> f64 {
    investment * (om_percent / 100.0)
}

/// 투자비 대비 보험료.
pub fn insurance_cost(investment: f64, insurance_percent: f64) -> f64 {
    investment * (insurance_percent / 100.0)
}

/// 해당 연도 매출 대비 관리비.
pub fn adm_cost(revenue: f64, adm_percent: f64) -> f64 {
    revenue * (adm_percent / 100.0)
}

/// 인상률이 0년차부터 복리로 반영된 연간 임대료.
pub fn rent_cost(rent_monthly: f64, adjustment_percent: f64, year: u32) -> f64 {
    rent_monthly * MONTHS_PER_YEAR * (1.0 + adjustment_percent / 100.0).powi(year as i32)
}

/// 교체 연도에만 발생하는 인버터 교체비.
pub fn inverter_cost(
    investment: f64,
    inverter_replace_percent: f64,
    year: u32,
    replacement_year: u32,
) -> f64 {
    if year == replacement_year {
        investment * (inverter_replace_percent / 100.0)
    } else {
        0.0
    }
}

/// 매출에 부과되는 세금.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Taxes {
    pub icms: f64,
    pub pis_cofins: f64,
}

impl Taxes {
    pub fn total(&self) -> f64 {
        self.icms + self.pis_cofins
    }
}

pub fn taxes(revenue: f64, tariff: &TariffData) -> Taxes {
    Taxes {
        icms: revenue * (tariff.icms_percent / 100.0),
        pis_cofins: revenue * (tariff.pis_cofins_percent / 100.0),
    }
}

/// 정액법 감가상각비. 분석 기간 전체에 동일하게 계상된다.
pub fn depreciation(investment: f64, depreciation_years: u32) -> f64 {
    investment / f64::from(depreciation_years)
}

/// 감가상각에 따른 절세 효과. 감가상각 기간(1..=depreciation_years) 동안만 발생한다.
pub fn depreciation_tax_benefit(
    investment: f64,
    depreciation_years: u32,
    year: u32,
    corporate_tax_percent: f64,
) -> f64 {
    if year <= depreciation_years {
        depreciation(investment, depreciation_years) * (corporate_tax_percent / 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tariff() -> TariffData {
        TariffData {
            energy_tariff: 300.0,
            tusd: 200.0,
            tusdg_demand: 20.0,
            tusdc_demand: 15.0,
            icms_percent: 18.0,
            pis_cofins_percent: 9.25,
        }
    }

    #[test]
    fn investment_from_rate_per_watt() {
        let system = SystemData {
            power_kwp: 100.0,
            ..Default::default()
        };
        let cost = CostData {
            capex_per_wp: 4.5,
            ..Default::default()
        };
        assert_eq!(initial_investment(&system, &cost), 4.5 * 100.0 * 1000.0);
    }

    #[test]
    fn explicit_total_overrides_rate() {
        let system = SystemData {
            power_kwp: 100.0,
            ..Default::default()
        };
        let mut cost = CostData {
            capex_per_wp: 4.5,
            capex_total: Some(380_000.0),
            ..Default::default()
        };
        assert_eq!(initial_investment(&system, &cost), 380_000.0);

        // 0은 미입력으로 취급
        cost.capex_total = Some(0.0);
        assert_eq!(initial_investment(&system, &cost), 450_000.0);
    }

    #[test]
    fn generation_compounds_from_year_zero() {
        assert_relative_eq!(degraded_generation(150.0, 0.5, 1), 149.25, epsilon = 1e-9);
        assert_relative_eq!(
            degraded_generation(150.0, 0.5, 2),
            150.0 * 0.995 * 0.995,
            epsilon = 1e-9
        );
        assert_eq!(degraded_generation(150.0, 0.0, 20), 150.0);
    }

    #[test]
    fn revenue_splits_energy_and_demand() {
        let r = revenue(149.25, 75.0, &tariff());
        assert_relative_eq!(r.energy, 74_625.0, epsilon = 1e-9);
        assert_eq!(r.demand, 31_500.0);
        assert_relative_eq!(r.total(), 106_125.0, epsilon = 1e-9);
    }

    #[test]
    fn rent_escalates_geometrically() {
        assert_relative_eq!(rent_cost(1000.0, 4.5, 1), 12_540.0, epsilon = 1e-9);
        assert_eq!(rent_cost(1000.0, 0.0, 7), 12_000.0);
    }

    #[test]
    fn inverter_only_in_replacement_year() {
        assert_eq!(inverter_cost(450_000.0, 15.0, 9, 10), 0.0);
        assert_relative_eq!(inverter_cost(450_000.0, 15.0, 10, 10), 67_500.0, epsilon = 1e-9);
        assert_eq!(inverter_cost(450_000.0, 15.0, 11, 10), 0.0);
    }

    #[test]
    fn taxes_are_flat_rates_on_revenue() {
        let t = taxes(100_000.0, &tariff());
        assert_relative_eq!(t.icms, 18_000.0, epsilon = 1e-9);
        assert_relative_eq!(t.pis_cofins, 9_250.0, epsilon = 1e-9);
        assert_relative_eq!(t.total(), 27_250.0, epsilon = 1e-9);
    }

    #[test]
    fn tax_benefit_stops_after_depreciation_period() {
        assert_eq!(depreciation(450_000.0, 10), 45_000.0);
        assert_relative_eq!(
            depreciation_tax_benefit(450_000.0, 10, 10, 34.0),
            15_300.0,
            epsilon = 1e-9
        );
        assert_eq!(depreciation_tax_benefit(450_000.0, 10, 11, 34.0), 0.0);
    }

    #[test]
    fn operating_costs_scale_with_base() {
        assert_relative_eq!(om_cost(450_000.0, 1.0), 4_500.0, epsilon = 1e-9);
        assert_relative_eq!(insurance_cost(450_000.0, 0.5), 2_250.0, epsilon = 1e-9);
        assert_relative_eq!(adm_cost(106_125.0, 2.0), 2_122.5, epsilon = 1e-9);
    }
}
