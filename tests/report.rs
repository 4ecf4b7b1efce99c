use solar_investment_toolbox::config::ReportSettings;
use solar_investment_toolbox::report::{self, ReportError};
use solar_investment_toolbox::{compute_projection, ProjectInput, ProjectionResult};

fn reference_result() -> ProjectionResult {
    let input = ProjectInput::reference_case();
    compute_projection(&input.system, &input.cost, &input.tariff, &input.financial)
}

#[test]
fn csv_has_summary_header_and_one_row_per_year() {
    let res = reference_result();
    let text = report::csv_string(&res, &ReportSettings::default()).expect("csv");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Project summary");
    assert_eq!(lines[1], "Initial investment;R$ 450.000,00");
    assert!(lines.contains(&"Simple payback;7 years"));
    assert!(lines.contains(&"Discounted payback;not reached"));

    let header_idx = lines
        .iter()
        .position(|l| l.starts_with("Year;"))
        .expect("header row");
    let header: Vec<&str> = lines[header_idx].split(';').collect();
    assert_eq!(header.len(), 16);
    assert_eq!(header[2], "Revenue (R$)");
    assert_eq!(lines[header_idx - 1], "");
    assert!(lines[header_idx - 2].starts_with("Total taxes;"));
    assert!(!text.contains("\"\""));

    let rows = &lines[header_idx + 1..];
    assert_eq!(rows.len(), 25);
    let first: Vec<&str> = rows[0].split(';').collect();
    assert_eq!(first[0], "1");
    assert_eq!(first[1], "149.25");
    assert_eq!(first[2], "106125.00");
    assert_eq!(rows[24].split(';').next(), Some("25"));
}

#[test]
fn csv_respects_delimiter_and_decimals() {
    let res = reference_result();
    let settings = ReportSettings {
        delimiter: ',',
        decimals: 0,
        ..Default::default()
    };
    let text = report::csv_string(&res, &settings).expect("csv");
    // 통화 문자열에 쉼표가 있어 인용 처리됨
    assert!(text.contains("Initial investment,\"R$ 450.000,00\""));
    assert!(text.lines().any(|l| l.starts_with("1,149,106125,")));
}

#[test]
fn non_ascii_delimiter_is_rejected() {
    let res = reference_result();
    let settings = ReportSettings {
        delimiter: '§',
        ..Default::default()
    };
    let err = report::csv_string(&res, &settings).unwrap_err();
    assert!(matches!(err, ReportError::Delimiter('§')));
}

#[test]
fn summary_document_formats_metrics() {
    let res = reference_result();
    let doc = report::summary_document(&res, &ReportSettings::default());
    assert_eq!(doc.summary.initial_investment, "R$ 450.000,00");
    assert_eq!(doc.summary.irr, "11.98%");
    assert_eq!(doc.summary.payback, "7 years");
    assert_eq!(doc.summary.discounted_payback, "not reached");
    assert_eq!(doc.cash_flow.len(), 25);
    assert_eq!(doc.cash_flow[0].revenue, "R$ 106.125,00");

    let json = doc.to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse back");
    assert_eq!(value["cash_flow"][9]["year"], 10);
    assert_eq!(value["summary"]["npv"], "-R$ 614,42");
}

#[test]
fn chart_series_follow_yearly_records() {
    let res = reference_result();
    let series = report::chart_series(&res);
    assert_eq!(series.cumulative.len(), res.years.len());
    assert_eq!(series.revenue_vs_costs.len(), res.years.len());

    let y10 = &res.years[9];
    let bar = series.revenue_vs_costs[9];
    assert_eq!(bar.year, 10);
    assert_eq!(bar.revenue, y10.revenue);
    // 10년차 인버터 교체비가 비용 막대에 포함
    assert!(bar.costs_and_taxes >= y10.inverter_cost + y10.taxes());
    assert_eq!(
        series.cumulative[24].discounted,
        res.years[24].cumulative_discounted_cash_flow
    );
}
