use serde::{Deserialize, Serialize};

use crate::Rotation;

/// Which of the four rotations of `B` to compute.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RotationRequest {
    pub r0: bool,
    pub r90: bool,
    pub r180: bool,
    pub r270: bool,
}

impl RotationRequest {
    pub fn is_requested(&self, r: Rotation) -> bool {
        match r {
            Rotation::R0 => self.r0,
            Rotation::R90 => self.r90,
            Rotation::R180 => self.r180,
            Rotation::R270 => self.r270,
        }
    }

    /// Requested rotations in the fixed visit order.
    pub fn iter(&self) -> impl Iterator<Item = Rotation> + '_ {
        Rotation::ALL.into_iter().filter(move |r| self.is_requested(*r))
    }

    pub fn any(&self) -> bool {
        self.r0 || self.r90 || self.r180 || self.r270
    }
}

/// Which aggregators to run, and whether smart-mode pruning applies.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AggregatorRequest {
    pub do_hist: bool,
    pub do_full: bool,
    pub do_worst: bool,
    pub do_smart: bool,
}

impl AggregatorRequest {
    pub fn any(&self) -> bool {
        self.do_hist || self.do_full || self.do_worst
    }
}
