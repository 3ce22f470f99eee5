use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;

use dmap_cli::events::SessionEvent;
use dmap_cli::replay::{ReplayOutcome, run_events};
use dmap_model::Category;

use crate::cli::ReplayArgs;
use crate::summary::apply_table_style;

/// Print the category/kind taxonomy.
pub fn run_kinds() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Kind", "Default"]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        for kind in category.kinds() {
            let default = if *kind == category.default_kind() {
                "*"
            } else {
                ""
            };
            table.add_row(vec![category.as_str(), kind.as_str(), default]);
        }
    }
    println!("{table}");
    Ok(())
}

/// Load and replay a session event file, then apply the selector override.
pub fn run_replay(args: &ReplayArgs) -> Result<ReplayOutcome> {
    let raw = fs::read_to_string(&args.events_file)
        .with_context(|| format!("read event file {}", args.events_file.display()))?;
    let events: Vec<SessionEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("parse event file {}", args.events_file.display()))?;
    let mut outcome = run_events(&events)?;
    if let Some(selector) = args.selector {
        outcome.session.set_selector(selector.into());
    }
    Ok(outcome)
}
