use std::io::Write;

use csv::WriterBuilder;

use crate::config::ReportSettings;
use crate::finance::ProjectionResult;

use super::format::{format_currency, format_number, format_payback, format_percent};
use super::ReportError;

const COLUMNS: [&str; 16] = [
    "Year",
    "Generation (MWh)",
    "Revenue",
    "O&M",
    "Insurance",
    "Administration",
    "Rent",
    "Inverter replacement",
    "ICMS",
    "PIS/COFINS",
    "Depreciation",
    "Tax benefit",
    "Net cash flow",
    "Cumulative cash flow",
    "Discounted cash flow",
    "Cumulative discounted cash flow",
];

/// 요약 블록, 구분 행, 헤더, 연도별 행 순서로 구분자 텍스트 보고서를 쓴다.
pub fn write_csv<W: Write>(
    result: &ProjectionResult,
    settings: &ReportSettings,
    writer: W,
) -> Result<(), ReportError> {
    if !settings.delimiter.is_ascii() {
        return Err(ReportError::Delimiter(settings.delimiter));
    }
    let delimiter = settings.delimiter as u8;
    let mut builder = WriterBuilder::new();
    builder.delimiter(delimiter).flexible(true);
    let mut writer = builder.from_writer(writer);

    let currency = |v: f64| format_currency(v, &settings.currency_symbol);
    let summary = [
        ("Initial investment", currency(result.initial_investment)),
        ("NPV", currency(result.npv)),
        ("IRR", format_percent(result.irr_percent())),
        (
            "IRR converged",
            if result.irr.converged { "yes" } else { "no" }.to_string(),
        ),
        ("Simple payback", format_payback(result.payback_year)),
        (
            "Discounted payback",
            format_payback(result.discounted_payback_year),
        ),
        ("Total revenue", currency(result.total_revenue)),
        (
            "Total operating costs",
            currency(result.total_operational_costs),
        ),
        ("Total taxes", currency(result.total_taxes)),
    ];

    writer.write_record(["Project summary"])?;
    for (label, value) in &summary {
        writer.write_record([*label, value.as_str()])?;
    }
    // 빈 레코드는 `""`로 인용되므로 구분 행은 줄바꿈만 직접 쓴다
    writer.flush()?;
    let mut inner = writer.into_inner().map_err(|e| e.into_error())?;
    inner.write_all(b"\n")?;
    let mut writer = builder.from_writer(inner);

    let header = COLUMNS.map(|c| match c {
        "Year" | "Generation (MWh)" => c.to_string(),
        _ => format!("{c} ({})", settings.currency_symbol),
    });
    writer.write_record(&header)?;

    let n = |v: f64| format_number(v, settings.decimals);
    for y in &result.years {
        writer.write_record([
            y.year.to_string(),
            n(y.generation),
            n(y.revenue),
            n(y.om_cost),
            n(y.insurance_cost),
            n(y.adm_cost),
            n(y.rent_cost),
            n(y.inverter_cost),
            n(y.taxes_icms),
            n(y.taxes_pis_cofins),
            n(y.depreciation),
            n(y.tax_benefit),
            n(y.net_cash_flow),
            n(y.cumulative_cash_flow),
            n(y.discounted_cash_flow),
            n(y.cumulative_discounted_cash_flow),
        ])?;
    }
    writer.flush()?;
    tracing::debug!(rows = result.years.len(), "CSV 보고서 작성");
    Ok(())
}

/// 보고서를 문자열로 만든다.
pub fn csv_string(result: &ProjectionResult, settings: &ReportSettings) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_csv(result, settings, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
