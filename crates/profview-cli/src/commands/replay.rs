//! Replay command
//!
//! Feeds a JSON-lines file of recorded UI events through an executor and
//! prints every resulting dispatch and navigation, one JSON object per line.
//!
//! Usage: profview replay <FILE> [--frame-every <N>] [--pathname <PATH>] [--query <JSON>]
//!
//! Each input line is an object tagged by `event`:
//!
//! ```text
//! {"event":"mergeFunctions","threadIndex":0,"oldFuncToNewFuncMap":{"7":3}}
//! {"event":"assignFunctionNames","threadIndex":0,"funcIndices":[3],"funcNames":["main"]}
//! {"event":"changeJsOnly","jsOnly":true}
//! {"event":"changeInvertCallstack","invertCallstack":false}
//! {"event":"addRangeFilter","start":10,"end":20}
//! {"event":"addRangeFilterAndUnsetSelection","start":12,"end":14}
//! {"event":"dispatch","action":{"type":"START_SYMBOLICATING"}}
//! {"event":"frame"}
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Args;
use profview_core::navigation::{self, Location, NavigationRequest, Navigator};
use profview_core::query::Query;
use profview_core::tasks;
use profview_core::{Action, Dispatch, ExError, Executor, ManualFrameScheduler};
use profview_core_types::{FuncIndex, ThreadIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON-lines file of recorded events
    pub file: PathBuf,

    /// Run a frame after every N events (0: only on explicit frame events and at the end)
    #[arg(long, default_value_t = 0)]
    pub frame_every: usize,

    /// Initial location pathname, carried into every navigation
    #[arg(long, default_value = "/")]
    pub pathname: String,

    /// Initial location query as a JSON object
    #[arg(long)]
    pub query: Option<String>,
}

/// One recorded UI event
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReplayEvent {
    MergeFunctions {
        thread_index: ThreadIndex,
        old_func_to_new_func_map: BTreeMap<FuncIndex, FuncIndex>,
    },
    AssignFunctionNames {
        thread_index: ThreadIndex,
        func_indices: Vec<FuncIndex>,
        func_names: Vec<String>,
    },
    ChangeJsOnly {
        js_only: bool,
    },
    ChangeInvertCallstack {
        invert_callstack: bool,
    },
    AddRangeFilter {
        start: f64,
        end: f64,
    },
    AddRangeFilterAndUnsetSelection {
        start: f64,
        end: f64,
    },
    Dispatch {
        action: Action,
    },
    /// Animation frame boundary
    Frame,
}

/// Observable output of the action layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
enum Effect {
    Dispatch(Action),
    Navigate(NavigationRequest),
}

/// Stands in for both the store and the history: records effects and keeps
/// the current location in step with navigations
#[derive(Debug)]
struct ReplaySink {
    location: RefCell<Location>,
    effects: RefCell<Vec<Effect>>,
}

impl ReplaySink {
    fn new(location: Location) -> Self {
        Self {
            location: RefCell::new(location),
            effects: RefCell::new(Vec::new()),
        }
    }

    fn location(&self) -> Location {
        self.location.borrow().clone()
    }
}

impl Dispatch for ReplaySink {
    fn dispatch(&self, action: Action) {
        self.effects.borrow_mut().push(Effect::Dispatch(action));
    }
}

impl Navigator for ReplaySink {
    fn navigate(&self, request: NavigationRequest) {
        {
            let mut location = self.location.borrow_mut();
            location.pathname = request.pathname.clone();
            location.query = request.query.clone();
        }
        self.effects.borrow_mut().push(Effect::Navigate(request));
    }
}

/// Execute replay command
pub fn execute(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = fs::read_to_string(&args.file)
        .map_err(|e| format!("cannot read {}: {}", args.file.display(), e))?;

    let query = match args.query.as_deref() {
        Some(json) => serde_json::from_str(json)?,
        None => Query::new(),
    };
    let sink = Rc::new(ReplaySink::new(Location::new(args.pathname, query)));
    let scheduler = Rc::new(ManualFrameScheduler::new());
    let executor = Executor::new(sink.clone(), sink.clone(), scheduler.clone());

    let mut replayed = 0usize;
    for (line_no, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event: ReplayEvent = serde_json::from_str(line)
            .map_err(|e| format!("line {}: invalid event: {}", line_no + 1, e))?;

        apply_event(&executor, &scheduler, &sink, event)
            .map_err(|e| format!("line {}: {}", line_no + 1, e))?;

        replayed += 1;
        if args.frame_every > 0 && replayed % args.frame_every == 0 {
            scheduler.run_frame();
        }
    }

    while scheduler.pending() > 0 {
        scheduler.run_frame();
    }

    for effect in sink.effects.borrow().iter() {
        println!("{}", serde_json::to_string(effect)?);
    }
    Ok(())
}

fn apply_event(
    executor: &Executor,
    scheduler: &ManualFrameScheduler,
    sink: &ReplaySink,
    event: ReplayEvent,
) -> Result<(), ExError> {
    match event {
        ReplayEvent::MergeFunctions {
            thread_index,
            old_func_to_new_func_map,
        } => executor.run(tasks::merge_functions(thread_index, old_func_to_new_func_map))?,

        ReplayEvent::AssignFunctionNames {
            thread_index,
            func_indices,
            func_names,
        } => executor.run(tasks::assign_function_names(
            thread_index,
            func_indices,
            func_names,
        ))?,

        ReplayEvent::ChangeJsOnly { js_only } => {
            executor.navigate(navigation::change_js_only(js_only, &sink.location())?);
        }

        ReplayEvent::ChangeInvertCallstack { invert_callstack } => {
            executor.navigate(navigation::change_invert_callstack(
                invert_callstack,
                &sink.location(),
            )?);
        }

        ReplayEvent::AddRangeFilter { start, end } => {
            executor.navigate(navigation::add_range_filter(start, end, &sink.location())?);
        }

        ReplayEvent::AddRangeFilterAndUnsetSelection { start, end } => {
            executor.run(tasks::add_range_filter_and_unset_selection(
                start,
                end,
                &sink.location(),
            ))?;
        }

        ReplayEvent::Dispatch { action } => executor.dispatch(action),

        ReplayEvent::Frame => {
            scheduler.run_frame();
        }
    }
    Ok(())
}
