use std::fmt::Write;

use crate::schemas::{EligibilityRecord, Totals};

const HEADERS: [&str; 7] = [
    "",
    "Address",
    "Eligible for Jupiter",
    "Jupiter Volume",
    "Eligible for Pyth",
    "Pyth Points",
    "Eligible for any",
];

fn mark(eligible: bool) -> &'static str {
    if eligible {
        "✅"
    } else {
        "❌"
    }
}

/// Two fraction digits with thousands separators, e.g. `12,345.60`. Ties
/// round away from zero.
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() / 100.0;
    let fixed = format!("{cents:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn rows(records: &[EligibilityRecord]) -> Vec<[String; 7]> {
    let mut rows: Vec<[String; 7]> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            [
                (i + 1).to_string(),
                record.address.clone(),
                mark(record.jupiter_eligible).to_string(),
                format_amount(record.jupiter_volume),
                mark(record.pyth_eligible).to_string(),
                record.pyth_points.to_string(),
                mark(record.eligible_any()).to_string(),
            ]
        })
        .collect();

    let totals = Totals::from_records(records);
    rows.push([
        "Total".to_string(),
        String::new(),
        String::new(),
        format_amount(totals.jupiter_volume),
        String::new(),
        totals.pyth_points.to_string(),
        String::new(),
    ]);

    rows
}

/// Renders the results table followed by a totals row.
pub fn render_table(records: &[EligibilityRecord]) -> String {
    let rows = rows(records);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "{}", line.trim_end());
    };

    push_line(&HEADERS.map(str::to_string));
    push_line(&widths.map(|w| "-".repeat(w)));
    for row in &rows {
        push_line(row);
    }

    out
}

pub fn to_json(records: &[EligibilityRecord]) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
