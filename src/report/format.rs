use crate::finance::NO_PAYBACK;

/// pt-BR 형식 통화 문자열(`R$ 1.234.567,89`). 음수는 `-R$ 1.234,56`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol} {value}");
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol} {integer},{fraction:02}")
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// 회수 연도 표시. -1이면 기간 내 미회수.
pub fn format_payback(year: i32) -> String {
    if year == NO_PAYBACK {
        "not reached".to_string()
    } else {
        format!("{year} years")
    }
}
