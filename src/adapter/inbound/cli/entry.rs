//! Handler for `waitlens entry`.

use chrono::Utc;
use serde_json::json;

use super::command::SetStatusArgs;
use super::context::Context;
use super::output;
use crate::domain::EntryId;
use crate::error::Result;

/// Execute `entry set-status`.
pub fn execute_set_status(ctx: &Context, args: &SetStatusArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let at = args.at.unwrap_or_else(Utc::now);
    let entry = store.set_status(&EntryId::new(args.id.as_str()), args.status, at)?;

    if output::is_json() {
        output::json_output(json!({ "command": "entry.set-status", "entry": entry }));
        return Ok(());
    }

    output::success(&format!("Entry {} is {}", entry.id(), entry.status()));
    if let Ok(Some(minutes)) = entry.wait_minutes() {
        output::field("Wait", format!("{} min", output::format_number(minutes.round())));
    }
    Ok(())
}
