use serde::{Deserialize, Serialize};

/// Timeline selection state
///
/// `has_selection` says whether a committed range exists; `is_modifying` is
/// true while the user is still dragging it out. The bounds are only
/// meaningful when `has_selection` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSelection {
    pub has_selection: bool,
    pub is_modifying: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_end: Option<f64>,
}

impl ProfileSelection {
    /// No selection and no drag in progress
    pub fn none() -> Self {
        Self::default()
    }
}
