//! Handler for `waitlens activity`.

use chrono::Utc;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ListArgs;
use super::context::Context;
use super::output;
use crate::domain::{ActivityItem, OwnerId};
use crate::error::Result;
use crate::port::inbound::analytics::AnalyticsQuery;

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Signed up")]
    created_at: String,
    #[tabled(rename = "Waitlist")]
    collection: String,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn activity_rows(items: &[ActivityItem]) -> Vec<ActivityRow> {
    items
        .iter()
        .map(|item| ActivityRow {
            created_at: item.entry.created_at().format("%Y-%m-%d %H:%M").to_string(),
            collection: item.collection_name.clone(),
            entry: item.entry.id().to_string(),
            status: item.entry.status().to_string(),
        })
        .collect()
}

/// Execute `activity`.
pub async fn execute(ctx: &Context, args: &ListArgs) -> Result<()> {
    let service = ctx.service()?;
    let owner = OwnerId::new(args.owner.as_str());
    let anchor = args.anchor.unwrap_or_else(Utc::now);
    let items = service.recent_activity(&owner, args.limit, anchor).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "activity",
            "owner": owner,
            "activity": items,
        }));
        return Ok(());
    }

    output::section(&format!("Recent activity · {owner}"));
    if items.is_empty() {
        output::note("(no signups yet)");
        return Ok(());
    }
    output::lines(&Table::new(activity_rows(&items)).to_string());
    Ok(())
}
