//! 태양광 분산발전 투자 분석 엔진.

pub mod cash_flow;
pub mod factors;
pub mod payback;
pub mod projection;
pub mod valuation;

pub use cash_flow::{CashFlowSchedule, YearlyRecord};
pub use payback::{find_payback_year, NO_PAYBACK};
pub use projection::*;
pub use valuation::{irr, npv, IrrEstimate};
