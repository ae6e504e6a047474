use serde::{Deserialize, Serialize};

/// Library whose symbol table is being looked up
///
/// Identified the way symbol servers address libraries: by debug file name
/// plus the breakpad identifier of that build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedLib {
    pub debug_name: String,
    pub breakpad_id: String,
}

impl RequestedLib {
    pub fn new(debug_name: impl Into<String>, breakpad_id: impl Into<String>) -> Self {
        Self {
            debug_name: debug_name.into(),
            breakpad_id: breakpad_id.into(),
        }
    }
}
