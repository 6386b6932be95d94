use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tree-wide configuration.
pub struct TreeOpts {
    /// Document direction; swaps `start`/`end` edges.
    pub right_to_left: bool,
    /// The `show` attribute toggles visibility instead of display.
    pub lite_style: bool,
    /// Wearable devices have no voice interaction wrapper.
    pub wearable: bool,
    /// Interaction signals are resolved through the UI task queue. When
    /// `false` there is no queue and such signals are dropped.
    pub deferred_tasks: bool,
}

impl Default for TreeOpts {
    fn default() -> Self {
        Self {
            right_to_left: false,
            lite_style: false,
            wearable: false,
            deferred_tasks: true,
        }
    }
}
