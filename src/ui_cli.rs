use crate::config::ReportSettings;
use crate::finance::ProjectionResult;
use crate::report::format::{format_currency, format_payback, format_percent};

/// 주요 지표를 콘솔에 출력한다.
pub fn print_summary(result: &ProjectionResult, settings: &ReportSettings) {
    let currency = |v: f64| format_currency(v, &settings.currency_symbol);
    println!("\n=== 태양광 분산발전 투자 분석 ===");
    println!("초기 투자비: {}", currency(result.initial_investment));
    println!("NPV: {}", currency(result.npv));
    if result.irr.converged {
        println!("IRR: {}", format_percent(result.irr_percent()));
    } else {
        println!("IRR: {} (근사값, 미수렴)", format_percent(result.irr_percent()));
    }
    println!("단순 회수기간: {}", format_payback(result.payback_year));
    println!("할인 회수기간: {}", format_payback(result.discounted_payback_year));
    println!("총 매출: {}", currency(result.total_revenue));
    println!("총 운영비: {}", currency(result.total_operational_costs));
    println!("총 세금: {}", currency(result.total_taxes));
}

/// 연도별 현금흐름 표를 출력한다.
pub fn print_yearly_table(result: &ProjectionResult) {
    println!(
        "\n{:>4} {:>10} {:>14} {:>14} {:>14} {:>16} {:>16}",
        "연도", "발전량", "매출", "운영비", "세금", "순현금흐름", "누적"
    );
    for y in &result.years {
        println!(
            "{:>4} {:>10.2} {:>14.2} {:>14.2} {:>14.2} {:>16.2} {:>16.2}",
            y.year,
            y.generation,
            y.revenue,
            y.operational_cost(),
            y.taxes(),
            y.net_cash_flow,
            y.cumulative_cash_flow
        );
    }
}
