pub mod functions_update;
pub mod requested_lib;
pub mod selection;

pub use functions_update::{FunctionsUpdatePerThread, ThreadFunctionsUpdate};
pub use requested_lib::RequestedLib;
pub use selection::ProfileSelection;
