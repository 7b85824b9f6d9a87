//! Handler for `waitlens summary`.

use chrono::Utc;
use serde_json::json;

use super::command::SummaryArgs;
use super::context::Context;
use super::output;
use crate::domain::CollectionId;
use crate::error::Result;
use crate::port::inbound::analytics::AnalyticsQuery;

/// Execute `summary`.
pub async fn execute(ctx: &Context, args: &SummaryArgs) -> Result<()> {
    let service = ctx.service()?;
    let collection = CollectionId::new(args.collection.as_str());
    let anchor = args.anchor.unwrap_or_else(Utc::now);
    let summary = service.collection_summary(&collection, anchor).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "summary",
            "collection": collection,
            "summary": summary,
        }));
        return Ok(());
    }

    output::section(&format!("Collection {collection}"));
    output::field("Signups", summary.total_signups);
    output::field("Approved", summary.approved_count);
    output::field("Rejected", summary.rejected_count);
    output::field("Pending", summary.pending_count);
    output::field("Conversion", format!("{:.1}%", summary.conversion_rate));
    if summary.total_signups == 0 {
        output::hint("no entries found; load some with `waitlens import`");
    }
    Ok(())
}
