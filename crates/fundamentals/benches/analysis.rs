//! Full analysis pass over three years of synthetic quarterly statements.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fundamentals::{Analyzer, CompanyData, CompanySnapshot, StatementSet};

const QUARTER_ENDS: [(u32, u32); 4] = [(3, 31), (6, 30), (9, 30), (12, 31)];

fn synthetic_company(quarters: usize) -> CompanyData {
    let mut quarterly = StatementSet::default();
    let mut annual = StatementSet::default();

    for i in 0..quarters {
        let (month, day) = QUARTER_ENDS[i % 4];
        let Some(date) = NaiveDate::from_ymd_opt(2021 + (i / 4) as i32, month, day) else {
            continue;
        };
        let scale = 1.0 + 0.03 * i as f64;
        let set = if month == 12 {
            vec![&mut quarterly, &mut annual]
        } else {
            vec![&mut quarterly]
        };
        for statements in set {
            let income = std::mem::take(&mut statements.income);
            statements.income = income
                .with(date, "Total Revenue", 1_000.0 * scale)
                .with(date, "Net Income", 90.0 * scale)
                .with(date, "Gross Profit", 400.0 * scale)
                .with(date, "Operating Income", 150.0 * scale);
            let balance = std::mem::take(&mut statements.balance_sheet);
            statements.balance_sheet = balance
                .with(date, "Total Assets", 5_000.0 * scale)
                .with(date, "Total Liabilities Net Minority Interest", 3_000.0)
                .with(date, "Stockholders Equity", 2_000.0 * scale)
                .with(date, "Current Assets", 1_500.0)
                .with(date, "Current Liabilities", 900.0)
                .with(date, "Inventory", 300.0)
                .with(date, "Cash And Cash Equivalents", 400.0)
                .with(date, "Accounts Receivable", 250.0)
                .with(date, "Retained Earnings", 1_200.0 * scale)
                .with(date, "Long Term Debt", 1_000.0);
            let cash_flow = std::mem::take(&mut statements.cash_flow);
            statements.cash_flow = cash_flow
                .with(date, "Operating Cash Flow", 180.0 * scale)
                .with(date, "Capital Expenditure", 60.0);
        }
    }

    CompanyData {
        quarterly,
        annual,
        snapshot: CompanySnapshot {
            long_name: Some("Synthetic Corp".to_string()),
            market_cap: Some(20_000.0),
            current_price: Some(50.0),
            shares_outstanding: Some(400.0),
            trailing_pe: Some(22.0),
            earnings_growth: Some(0.1),
            dividend_rate: Some(0.8),
            ..CompanySnapshot::default()
        },
    }
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = Analyzer::default();
    let data = synthetic_company(12);

    c.bench_function("analyze_12_quarters", |b| {
        b.iter(|| analyzer.analyze_data("SYN", black_box(data.clone())))
    });

    let analysis = analyzer.analyze_data("SYN", data).expect("synthetic data is valid");
    c.bench_function("render_quarterly_frames", |b| {
        b.iter(|| {
            let financials = analysis.quarterly.financials_frame();
            let ratios = analysis.quarterly.ratios_frame();
            black_box((financials, ratios))
        })
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
