//! Machine parameters supplied by the host application.

use serde::{Deserialize, Serialize};

/// Machine-level cutting parameters, read once per invocation from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineParams {
    /// Stock material thickness (mm)
    pub thickness: f64,
    /// Stepover between adjacent passes, percent of tool diameter
    pub stepover_percent: f64,
    /// Cutting feed rate in the XY plane (mm/min)
    pub feed: f64,
    /// Plunge feed rate along Z (mm/min)
    pub feed_z: f64,
    /// Rapid-travel height above the stock top (mm)
    pub safe_height: f64,
    /// Maximum depth of cut per pass (mm)
    pub step_down: f64,
    /// Tool diameter (mm)
    pub tool_diameter: f64,
}

impl Default for MachineParams {
    fn default() -> Self {
        Self {
            thickness: 18.0,
            stepover_percent: 50.0,
            feed: 1000.0,
            feed_z: 300.0,
            safe_height: 3.0,
            step_down: 6.0,
            tool_diameter: 6.0,
        }
    }
}

impl MachineParams {
    /// Tool radius (mm)
    pub fn tool_radius(&self) -> f64 {
        self.tool_diameter / 2.0
    }

    /// Physical advance between adjacent stepover lines (mm): the part of
    /// the tool diameter not overlapping the previous pass.
    pub fn stepover_advance(&self) -> f64 {
        self.tool_diameter * (1.0 - self.stepover_percent / 100.0)
    }
}
