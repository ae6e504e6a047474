use std::cell::RefCell;
use std::rc::Rc;

use profview_core::{Action, Dispatch, Executor, ManualFrameScheduler, NavigationRequest, Navigator};

/// Something the executor handed to a collaborator, in call order
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Dispatched(Action),
    Navigated(NavigationRequest),
}

/// Store and history stand-in that records every effect in one log
#[derive(Default)]
pub struct Recorder {
    effects: RefCell<Vec<Effect>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Effect::Dispatched(a) => Some(a.clone()),
                Effect::Navigated(_) => None,
            })
            .collect()
    }
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.effects.borrow_mut().push(Effect::Dispatched(action));
    }
}

impl Navigator for Recorder {
    fn navigate(&self, request: NavigationRequest) {
        self.effects.borrow_mut().push(Effect::Navigated(request));
    }
}

/// Executor wired to a fresh recorder and a hand-driven frame scheduler
pub struct Harness {
    pub scheduler: Rc<ManualFrameScheduler>,
    pub recorder: Rc<Recorder>,
    pub executor: Executor,
}

#[allow(dead_code)]
pub fn harness() -> Harness {
    let scheduler = Rc::new(ManualFrameScheduler::new());
    let recorder = Rc::new(Recorder::default());
    let executor = Executor::new(recorder.clone(), recorder.clone(), scheduler.clone());
    Harness {
        scheduler,
        recorder,
        executor,
    }
}
