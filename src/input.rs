//! 투자 분석 입력 파라미터 묶음.
//!
//! 엔진 자체는 값을 보정하지 않는다. 빈 칸/누락 필드는 역직렬화 단계에서 0으로 채워지고,
//! 실행 전 검증은 [`ProjectInput::validate`]가 담당한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 발전 설비 입력값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemData {
    /// DC 설치 용량 [kWp]
    pub power_kwp: f64,
    /// 연간 발전량(P90) [MWh/년]
    pub annual_generation_mwh: f64,
    /// 계약 수요전력 [kW]
    pub contracted_demand_kw: f64,
}

/// 투자비/운영비 입력값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostData {
    /// 와트당 투자비 [통화/Wp]
    pub capex_per_wp: f64,
    /// 총 투자비를 직접 지정할 때 사용 [통화]. 0 또는 미지정이면 와트당 단가로 계산한다.
    pub capex_total: Option<f64>,
    /// 보험료(투자비 대비 %)
    pub insurance_percent: f64,
    /// O&M 비용(투자비 대비 %)
    pub om_percent: f64,
    /// 관리비(매출 대비 %)
    pub adm_percent: f64,
    /// 1년차 월 임대료 [통화/월]
    pub rent_monthly: f64,
    /// 인버터 교체비(투자비 대비 %), 교체 연도에 1회 발생
    pub inverter_replace_percent: f64,
}

/// 요금 입력값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffData {
    /// 에너지 요금(TE) [통화/MWh]
    pub energy_tariff: f64,
    /// 배전망 사용 요금(TUSD) [통화/MWh]
    pub tusd: f64,
    /// 발전측 수요 요금(TUSDg) [통화/kW·월]
    pub tusdg_demand: f64,
    /// 소비측 수요 요금(TUSDc) [통화/kW·월]
    pub tusdc_demand: f64,
    /// ICMS 세율(매출 대비 %)
    pub icms_percent: f64,
    /// PIS/COFINS 세율(매출 대비 %)
    pub pis_cofins_percent: f64,
}

/// 임대료 인상 기준.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// 소비자물가지수(IPCA) 연동
    #[default]
    Ipca,
    /// 에너지 요금 연동
    Energy,
}

/// 재무 입력값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialData {
    /// 할인율 [%/년]
    pub discount_rate: f64,
    pub adjustment_type: AdjustmentType,
    /// 임대료 인상률 [%/년]
    pub adjustment_rate: f64,
    /// 연간 발전량 감소율 [%/년]
    pub annual_degradation: f64,
    /// 감가상각 기간 [년]
    pub depreciation_years: u32,
    /// 분석 기간 [년]
    pub project_years: u32,
}

/// 한 번의 계산에 필요한 네 가지 입력 묶음.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    pub system: SystemData,
    pub cost: CostData,
    pub tariff: TariffData,
    pub financial: FinancialData,
}

/// 허용하는 최대 분석 기간 [년].
pub const MAX_PROJECT_YEARS: u32 = 1000;

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("숫자가 아닌 값: {field}")]
    NonFinite { field: &'static str },
    #[error("분석 기간은 1~1000년이어야 합니다 (입력값 {0})")]
    ProjectYears(u32),
    #[error("감가상각 기간은 1년 이상이어야 합니다 (입력값 {0})")]
    DepreciationYears(u32),
    #[error("발전량 감소율은 100% 미만이어야 합니다 (입력값 {0}%)")]
    Degradation(f64),
    #[error("할인율은 -100%보다 커야 합니다 (입력값 {0}%)")]
    DiscountRate(f64),
}

impl ProjectInput {
    /// 기준 시나리오(100 kWp, 4.5/Wp, 25년).
    pub fn reference_case() -> Self {
        Self {
            system: SystemData {
                power_kwp: 100.0,
                annual_generation_mwh: 150.0,
                contracted_demand_kw: 75.0,
            },
            cost: CostData {
                capex_per_wp: 4.5,
                capex_total: None,
                insurance_percent: 0.5,
                om_percent: 1.0,
                adm_percent: 2.0,
                rent_monthly: 1000.0,
                inverter_replace_percent: 15.0,
            },
            tariff: TariffData {
                energy_tariff: 300.0,
                tusd: 200.0,
                tusdg_demand: 20.0,
                tusdc_demand: 15.0,
                icms_percent: 18.0,
                pis_cofins_percent: 9.25,
            },
            financial: FinancialData {
                discount_rate: 12.0,
                adjustment_type: AdjustmentType::Ipca,
                adjustment_rate: 4.5,
                annual_degradation: 0.5,
                depreciation_years: 10,
                project_years: 25,
            },
        }
    }

    /// 엔진에 넘기기 전 입력값을 검증한다.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        let fin = &self.financial;
        if !(1..=MAX_PROJECT_YEARS).contains(&fin.project_years) {
            return Err(InputError::ProjectYears(fin.project_years));
        }
        if fin.depreciation_years < 1 {
            return Err(InputError::DepreciationYears(fin.depreciation_years));
        }
        if fin.annual_degradation >= 100.0 {
            return Err(InputError::Degradation(fin.annual_degradation));
        }
        if fin.discount_rate <= -100.0 {
            return Err(InputError::DiscountRate(fin.discount_rate));
        }
        Ok(())
    }

    fn numeric_fields(&self) -> [(&'static str, f64); 19] {
        let (s, c, t, f) = (&self.system, &self.cost, &self.tariff, &self.financial);
        [
            ("system.power_kwp", s.power_kwp),
            ("system.annual_generation_mwh", s.annual_generation_mwh),
            ("system.contracted_demand_kw", s.contracted_demand_kw),
            ("cost.capex_per_wp", c.capex_per_wp),
            ("cost.capex_total", c.capex_total.unwrap_or(0.0)),
            ("cost.insurance_percent", c.insurance_percent),
            ("cost.om_percent", c.om_percent),
            ("cost.adm_percent", c.adm_percent),
            ("cost.rent_monthly", c.rent_monthly),
            ("cost.inverter_replace_percent", c.inverter_replace_percent),
            ("tariff.energy_tariff", t.energy_tariff),
            ("tariff.tusd", t.tusd),
            ("tariff.tusdg_demand", t.tusdg_demand),
            ("tariff.tusdc_demand", t.tusdc_demand),
            ("tariff.icms_percent", t.icms_percent),
            ("tariff.pis_cofins_percent", t.pis_cofins_percent),
            ("financial.discount_rate", f.discount_rate),
            ("financial.adjustment_rate", f.adjustment_rate),
            ("financial.annual_degradation", f.annual_degradation),
        ]
    }
}
