/// 분석 기간 내 회수되지 않음을 나타내는 값.
pub const NO_PAYBACK: i32 = -1;

/// 누적 현금흐름이 처음으로 0 이상이 되는 연도(1부터 시작)를 찾는다. 없으면 [`NO_PAYBACK`].
pub fn find_payback_year(cumulative: &[f64]) -> i32 {
    cumulative
        .iter()
        .position(|&value| value >= 0.0)
        .map_or(NO_PAYBACK, |idx| idx as i32 + 1)
}
