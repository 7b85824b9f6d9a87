//! Handler for `waitlens report`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ReportArgs;
use super::context::{compute, Computed, Context, Window};
use super::output;
use crate::domain::{AnalyticsResult, CollectionId, OwnerId};
use crate::error::Result;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Signups")]
    signups: String,
    #[tabled(rename = "Approvals")]
    approvals: String,
    #[tabled(rename = "Conversion %")]
    conversion: String,
    #[tabled(rename = "Wait (min)")]
    wait_time: String,
}

fn day_rows(result: &AnalyticsResult, all_days: bool) -> Vec<DayRow> {
    let charts = &result.charts;
    charts
        .signups
        .iter()
        .zip(&charts.approvals)
        .zip(&charts.conversion)
        .zip(&charts.wait_time)
        .filter(|(((signups, _), _), _)| all_days || signups.value > 0.0)
        .map(|(((signups, approvals), conversion), wait)| DayRow {
            date: signups.date.to_string(),
            signups: output::format_number(signups.value),
            approvals: output::format_number(approvals.value),
            conversion: format!("{:.1}", conversion.value),
            wait_time: output::format_number(wait.value),
        })
        .collect()
}

/// Execute `report`.
pub async fn execute(ctx: &Context, args: &ReportArgs) -> Result<()> {
    let window = Window::resolve(&args.window, &ctx.config)?;
    let service = ctx.service()?;
    let owner = OwnerId::new(args.owner.as_str());
    let collection = args.collection.as_deref().map(CollectionId::new);
    let computed = compute(&service, &owner, collection.as_ref(), &window, args.window.anchor).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "report",
            "owner": owner,
            "collection": collection,
            "range": computed.range.label,
            "anchor": computed.anchor,
            "result": computed.result,
        }));
        return Ok(());
    }

    print_report(&owner, collection.as_ref(), &computed);
    Ok(())
}

fn print_report(owner: &OwnerId, collection: Option<&CollectionId>, computed: &Computed) {
    let metrics = &computed.result.metrics;

    output::header(env!("CARGO_PKG_VERSION"));
    let scope = match collection {
        Some(collection) => format!("{owner}/{collection}"),
        None => owner.to_string(),
    };
    output::section(&format!("{} · {}", computed.range.label, scope));
    output::field("Window", format!("{} to {}", computed.range.start, computed.range.end));

    output::section("Metrics");
    output::metric("Signups", &metrics.total_signups, "");
    output::metric("Conversion", &metrics.conversion_rate, "%");
    output::metric("Avg wait", &metrics.average_wait_time, " min");
    output::metric("Active lists", &metrics.active_collections, "");

    output::section("Daily");
    // Every day is listed at -v; otherwise only days with signups.
    let rows = day_rows(&computed.result, output::verbosity() > 0);
    if rows.is_empty() {
        output::note("(no signups in this window)");
        return;
    }
    output::lines(&Table::new(rows).to_string());
}
