//! NPV/IRR 계산.
//!
//! 현금흐름 슬라이스의 i번째 값은 (i+1)년차 순현금흐름이며, 초기 투자비는 0년차에 별도로 차감한다.

use roots::{find_root_brent, Convergency};
use serde::Serialize;

use crate::config::{IrrMethod, IrrSettings};

/// 소수 할인율(0.12 = 12%)에서의 NPV.
fn npv_at_fraction(cash_flows: &[f64], rate: f64, investment: f64) -> f64 {
    let mut npv = -investment;
    let mut factor = 1.0;
    for cf in cash_flows {
        factor *= 1.0 + rate;
        npv += cf / factor;
    }
    npv
}

/// 할인율(%)로 순현재가치를 계산한다.
pub fn npv(cash_flows: &[f64], discount_rate_percent: f64, investment: f64) -> f64 {
    npv_at_fraction(cash_flows, discount_rate_percent / 100.0, investment)
}

/// IRR 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrrEstimate {
    /// 내부수익률 [%]. 수렴하지 못한 경우 마지막 추정값.
    pub rate_percent: f64,
    /// NPV가 허용오차 안으로 들어왔는지 여부
    pub converged: bool,
    /// 실제로 값을 만든 탐색 방식
    pub method: IrrMethod,
}

/// 설정된 방식으로 IRR을 추정한다. 수렴 실패는 오류가 아니며 최선의 근사값을 돌려준다.
pub fn irr(cash_flows: &[f64], investment: f64, settings: &IrrSettings) -> IrrEstimate {
    let estimate = match settings.method {
        IrrMethod::SteppedSearch => stepped_search(cash_flows, investment, settings),
        IrrMethod::Brent => brent(cash_flows, investment, settings)
            .unwrap_or_else(|| stepped_search(cash_flows, investment, settings)),
    };
    if !estimate.converged {
        tracing::warn!(
            rate_percent = estimate.rate_percent,
            method = ?estimate.method,
            "IRR이 허용오차 내로 수렴하지 않아 근사값을 사용"
        );
    }
    estimate
}

/// 10%/10%p에서 시작하는 단방향 탐색.
///
/// NPV > 0이면 추정값을 보폭만큼 올리고, 아니면 내린 뒤 보폭을 절반으로 줄인다.
/// 보폭은 다시 커지지 않는다.
pub fn stepped_search(cash_flows: &[f64], investment: f64, settings: &IrrSettings) -> IrrEstimate {
    let mut guess = settings.initial_guess_percent / 100.0;
    let mut step = settings.initial_step_percent / 100.0;
    let mut converged = false;

    for _ in 0..settings.max_iterations {
        let npv = npv_at_fraction(cash_flows, guess, investment);
        if npv.abs() < settings.tolerance {
            converged = true;
            break;
        }
        if !npv.is_finite() {
            break;
        }
        if npv > 0.0 {
            guess += step;
        } else {
            guess -= step;
            step /= 2.0;
        }
    }

    IrrEstimate {
        rate_percent: guess * 100.0,
        converged,
        method: IrrMethod::SteppedSearch,
    }
}

/// 구간 수렴 판정 폭(소수 할인율).
const RATE_EPSILON: f64 = 1e-15;

/// NPV 허용오차로 근을 판정하고, 할인율 구간이 거의 0이 되면 수렴으로 본다.
struct NpvConvergency {
    tolerance: f64,
    max_iterations: usize,
}

impl Convergency<f64> for NpvConvergency {
    fn is_root_found(&mut self, y: f64) -> bool {
        y.abs() < self.tolerance
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() < RATE_EPSILON
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iterations
    }
}

/// 하한에서 NPV가 유한해질 때까지 하한을 0 쪽으로 절반씩 당긴다.
///
/// 긴 기간에서 (1 + rate)^n이 0으로 언더플로하면 NPV가 무한대가 된다.
fn finite_lower_bound(cash_flows: &[f64], lower: f64, investment: f64) -> f64 {
    let mut lower = lower;
    while lower < 0.0 && !npv_at_fraction(cash_flows, lower, investment).is_finite() {
        lower /= 2.0;
    }
    lower
}

/// 설정 구간에서 Brent 방식으로 근을 찾는다. 구간 양끝에 부호 변화가 없으면 `None`.
///
/// 할인율 구간만 좁혀지고 NPV가 허용오차에 들지 못하면 `converged = false`.
pub fn brent(cash_flows: &[f64], investment: f64, settings: &IrrSettings) -> Option<IrrEstimate> {
    let lower = finite_lower_bound(
        cash_flows,
        settings.lower_bound_percent / 100.0,
        investment,
    );
    let upper = settings.upper_bound_percent / 100.0;
    let mut convergency = NpvConvergency {
        tolerance: settings.tolerance,
        max_iterations: settings.max_iterations as usize,
    };

    match find_root_brent(
        lower,
        upper,
        |rate| npv_at_fraction(cash_flows, rate, investment),
        &mut convergency,
    ) {
        Ok(rate) => Some(IrrEstimate {
            rate_percent: rate * 100.0,
            converged: npv_at_fraction(cash_flows, rate, investment).abs() < settings.tolerance,
            method: IrrMethod::Brent,
        }),
        Err(e) => {
            tracing::debug!(error = ?e, lower, upper, "Brent 탐색 실패, 단계 탐색으로 대체");
            None
        }
    }
}
