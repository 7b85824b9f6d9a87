//! Handler for `waitlens top`.

use chrono::Utc;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ListArgs;
use super::context::Context;
use super::output;
use crate::domain::{CollectionRanking, OwnerId};
use crate::error::Result;
use crate::port::inbound::analytics::AnalyticsQuery;

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Waitlist")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Entries")]
    entries: u64,
    #[tabled(rename = "Conversion %")]
    conversion: String,
}

fn ranking_rows(ranked: &[CollectionRanking]) -> Vec<RankingRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, r)| RankingRow {
            rank: i + 1,
            name: r.collection.name.clone(),
            status: r.collection.status.to_string(),
            entries: r.entry_count,
            conversion: format!("{:.1}", r.conversion_rate),
        })
        .collect()
}

/// Execute `top`.
pub async fn execute(ctx: &Context, args: &ListArgs) -> Result<()> {
    let service = ctx.service()?;
    let owner = OwnerId::new(args.owner.as_str());
    let anchor = args.anchor.unwrap_or_else(Utc::now);
    let ranked = service.top_collections(&owner, args.limit, anchor).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "top",
            "owner": owner,
            "collections": ranked,
        }));
        return Ok(());
    }

    output::section(&format!("Top waitlists · {owner}"));
    if ranked.is_empty() {
        output::note("(no collections)");
        return Ok(());
    }
    output::lines(&Table::new(ranking_rows(&ranked)).to_string());
    Ok(())
}
