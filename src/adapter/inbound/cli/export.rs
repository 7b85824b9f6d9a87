//! Handler for `waitlens export`.

use std::fmt::Write as _;
use std::fs;

use super::command::{ExportArgs, ExportFormat};
use super::context::{compute, Context, Window};
use super::output;
use crate::domain::{AnalyticsResult, CollectionId, OwnerId};
use crate::error::Result;

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "date,signups,approvals,conversion,wait_time";

/// Render the four daily series as CSV, one row per bucket.
///
/// Conversion carries two decimals; counts and wait minutes are written as
/// plain numbers.
#[must_use]
pub fn to_csv(result: &AnalyticsResult) -> String {
    let charts = &result.charts;
    let mut csv = String::with_capacity(32 * (charts.signups.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for (((signups, approvals), conversion), wait) in charts
        .signups
        .iter()
        .zip(&charts.approvals)
        .zip(&charts.conversion)
        .zip(&charts.wait_time)
    {
        // Writing to a String cannot fail.
        let _ = writeln!(
            csv,
            "{},{},{},{:.2},{}",
            signups.date, signups.value, approvals.value, conversion.value, wait.value
        );
    }
    csv
}

/// Render the full result as pretty JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(result: &AnalyticsResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Execute `export`.
pub async fn execute(ctx: &Context, args: &ExportArgs) -> Result<()> {
    let window = Window::resolve(&args.window, &ctx.config)?;
    let service = ctx.service()?;
    let owner = OwnerId::new(args.owner.as_str());
    let collection = args.collection.as_deref().map(CollectionId::new);
    let computed = compute(&service, &owner, collection.as_ref(), &window, args.window.anchor).await?;

    let rendered = match args.format {
        ExportFormat::Csv => to_csv(&computed.result),
        ExportFormat::Json => to_json(&computed.result)? + "\n",
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            output::success(&format!("Exported {}", computed.range.label));
            output::field("Path", path.display());
            output::field("Rows", computed.range.len());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{date_range, ChartPoint, ChartSeries};
    use crate::testkit::domain::at;

    fn series(values: &[f64]) -> ChartSeries {
        let buckets = date_range(values.len() as i64 - 1, at(2024, 1, 2, 0, 0)).unwrap();
        buckets
            .into_iter()
            .zip(values)
            .map(|(date, &value)| ChartPoint { date, value })
            .collect()
    }

    #[test]
    fn csv_has_header_and_one_row_per_day() {
        let mut result = AnalyticsResult::default();
        result.charts.signups = series(&[2.0, 0.0]);
        result.charts.approvals = series(&[1.0, 0.0]);
        result.charts.conversion = series(&[50.0, 0.0]);
        result.charts.wait_time = series(&[30.0, 0.0]);

        let csv = to_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                CSV_HEADER,
                "2024-01-01,2,1,50.00,30",
                "2024-01-02,0,0,0.00,0",
            ]
        );
    }

    #[test]
    fn json_uses_presentation_field_names() {
        let json = to_json(&AnalyticsResult::default()).unwrap();
        assert!(json.contains("\"totalSignups\""));
        assert!(json.contains("\"waitTime\""));
    }
}
