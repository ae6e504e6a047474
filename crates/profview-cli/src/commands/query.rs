//! Query command
//!
//! Usage: profview query <add-range-filter|set-flag> ... [--query <JSON>]

use clap::{Args, Subcommand, ValueEnum};
use profview_core::navigation::{push_query_action, Location};
use profview_core::query::{Query, QueryAction};
use profview_core::ExError;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// Append a range filter to the query's zoom steps
    AddRangeFilter(AddRangeFilterArgs),
    /// Switch a boolean view flag on or off
    SetFlag(SetFlagArgs),
}

#[derive(Debug, Args)]
pub struct AddRangeFilterArgs {
    /// Range start
    #[arg(long, allow_negative_numbers = true)]
    pub start: f64,

    /// Range end
    #[arg(long, allow_negative_numbers = true)]
    pub end: f64,

    /// Current query as a JSON object (default: empty)
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Flag {
    /// Show JavaScript frames only
    JsOnly,
    /// Invert the call tree
    InvertCallstack,
}

#[derive(Debug, Args)]
pub struct SetFlagArgs {
    /// Flag to change
    #[arg(value_enum)]
    pub flag: Flag,

    /// Desired state
    #[arg(action = clap::ArgAction::Set)]
    pub on: bool,

    /// Current query as a JSON object (default: empty)
    #[arg(long)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
struct QueryOutcome {
    query: Query,
    changed: bool,
}

/// Execute query command
pub fn execute(args: QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (action, query) = match args.command {
        QueryCommand::AddRangeFilter(a) => (
            QueryAction::AddRangeFilter {
                start: a.start,
                end: a.end,
            },
            a.query,
        ),
        QueryCommand::SetFlag(a) => {
            let action = match a.flag {
                Flag::JsOnly => QueryAction::ChangeJsOnly { js_only: a.on },
                Flag::InvertCallstack => QueryAction::ChangeInvertCallstack {
                    invert_callstack: a.on,
                },
            };
            (action, a.query)
        }
    };

    let location = Location::new("/", parse_query(query.as_deref())?);
    let request = push_query_action(&action, &location)
        .map_err(|e| ExError::from(e).with_op("query"))?;

    let outcome = QueryOutcome {
        changed: !Query::ptr_eq(&request.query, &location.query),
        query: request.query,
    };
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}

fn parse_query(raw: Option<&str>) -> Result<Query, Box<dyn std::error::Error>> {
    match raw {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(Query::new()),
    }
}
