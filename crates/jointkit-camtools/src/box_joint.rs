//! Box Joint Maker
//!
//! Removes every other box along the edge of a board so that two boards cut
//! with opposite parities mesh into an interlocking corner. The cut runs
//! through the full stock thickness in step-down layers; within each box
//! the tool zig-zags across the board edge between two runways that sit
//! clear of the stock on both sides.

use jointkit_core::{Block, BlockStats, GcodeDocument, MachineParams, MotionCommand};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::depth_passes::StepDownPlan;
use crate::error::{CamToolResult, ParameterError, ParameterResult};
use crate::segments::{CutParity, SegmentPlan, SegmentPlanner};
use crate::stepover::StepoverPlan;

/// User-entered parameters for one box joint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxJointParameters {
    /// Block name; empty selects the default.
    pub name: String,
    /// Total width of the joint along X (mm).
    pub total_width: f64,
    /// Width of the odd (1st, 3rd, ...) boxes (mm).
    pub box_width_odd: f64,
    /// Width of the even (2nd, 4th, ...) boxes (mm).
    pub box_width_even: f64,
    /// Clearance past the stock on both runways and board edges (mm).
    pub margin: f64,
    /// Signed fit tweak applied asymmetrically to box edges (mm).
    pub fit_offset: f64,
    /// Cut the odd boxes.
    pub cut_odd: bool,
    /// Cut the even boxes.
    pub cut_even: bool,
}

impl Default for BoxJointParameters {
    fn default() -> Self {
        Self {
            name: String::new(),
            total_width: 100.0,
            box_width_odd: 20.0,
            box_width_even: 20.0,
            margin: 2.0,
            fit_offset: 0.0,
            cut_odd: true,
            cut_even: false,
        }
    }
}

/// Generator for box joint toolpaths.
pub struct BoxJointGenerator {
    params: BoxJointParameters,
}

impl BoxJointGenerator {
    /// Create a new BoxJointGenerator with the given parameters.
    pub fn new(params: BoxJointParameters) -> Self {
        Self { params }
    }

    /// Display name used for the generated blocks.
    pub fn block_name(&self) -> &str {
        let name = self.params.name.trim();
        if name.is_empty() || name == "default" {
            "Box joint"
        } else {
            name
        }
    }

    fn validate(&self, machine: &MachineParams) -> ParameterResult<()> {
        if machine.stepover_percent <= 0.0 || machine.stepover_percent >= 100.0 {
            return Err(ParameterError::OutOfRange {
                name: "stepover_percent".to_string(),
                value: machine.stepover_percent,
                min: 0.0,
                max: 100.0,
            });
        }
        for (name, value) in [
            ("tool_diameter", machine.tool_diameter),
            ("thickness", machine.thickness),
            ("step_down", machine.step_down),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        }
        if !self.params.cut_odd && !self.params.cut_even {
            return Err(ParameterError::Incompatible(
                "neither the odd nor the even boxes are selected for cutting".to_string(),
            ));
        }
        Ok(())
    }

    fn planner(&self, machine: &MachineParams) -> SegmentPlanner {
        SegmentPlanner {
            total_width: self.params.total_width,
            width_odd: self.params.box_width_odd,
            width_even: self.params.box_width_even,
            margin: self.params.margin,
            fit_offset: self.params.fit_offset,
            tool_diameter: machine.tool_diameter,
        }
    }

    /// Generate the motion blocks, one per requested parity. Validation
    /// happens up front; on rejection no motion is produced.
    pub fn generate(&self, machine: &MachineParams) -> CamToolResult<Vec<Block>> {
        self.validate(machine)?;
        let plan = self.planner(machine).plan()?;
        let layers = StepDownPlan::new(machine.thickness, machine.step_down);

        debug!(
            segments = plan.segment_count(),
            layers = layers.pass_count(),
            parity_inverted = plan.parity_inverted(),
            "generating box joint"
        );

        let both = self.params.cut_odd && self.params.cut_even;
        let mut blocks = Vec::new();
        for (parity, requested, suffix) in [
            (CutParity::Odd, self.params.cut_odd, " (odd)"),
            (CutParity::Even, self.params.cut_even, " (even)"),
        ] {
            if !requested {
                continue;
            }
            let name = if both {
                format!("{}{}", self.block_name(), suffix)
            } else {
                self.block_name().to_string()
            };
            blocks.push(self.assemble_pass(name, machine, &plan, &layers, parity));
        }
        Ok(blocks)
    }

    /// Generates the blocks and hands them to the host document. Returns
    /// the status message for the host to display.
    pub fn insert_into(
        &self,
        machine: &MachineParams,
        document: &mut GcodeDocument,
    ) -> CamToolResult<String> {
        let blocks = self.generate(machine)?;
        for block in &blocks {
            let stats = BlockStats::from_block(block, machine);
            debug!(
                block = %block.name,
                cut_mm = stats.cut_distance,
                rapid_mm = stats.rapid_distance,
                plunges = stats.plunge_count,
                "assembled block"
            );
        }
        document.insert_blocks(blocks);
        Ok(format!("Generated: {}", self.block_name()))
    }

    /// Emits one full pass over the joint: every layer, every active box.
    fn assemble_pass(
        &self,
        name: String,
        machine: &MachineParams,
        plan: &SegmentPlan,
        layers: &StepDownPlan,
        parity: CutParity,
    ) -> Block {
        let mut block = Block::new(name);
        let segments = plan.active_segments(parity);

        // Runways clear of the stock on both sides of the board edge.
        let y_low = -machine.tool_radius() - self.params.margin;
        let y_high = machine.thickness + machine.tool_radius() + self.params.margin;

        for z in layers.pass_depths() {
            block.push(MotionCommand::RetractToSafe);
            let mut y = y_low;
            let mut at_high = false;
            let mut plunged = false;

            for segment in &segments {
                let lines =
                    StepoverPlan::for_width(segment.width(), machine.tool_diameter, machine.stepover_percent);
                let mut x = segment.start + lines.line_offset(0);
                block.push(MotionCommand::RapidTo { x, y });
                if !plunged {
                    block.push(MotionCommand::PlungeTo {
                        z,
                        feed: machine.feed_z,
                    });
                    plunged = true;
                }

                for line in 0..lines.line_count() {
                    at_high = !at_high;
                    y = if at_high { y_high } else { y_low };
                    // The first line engages the full tool diameter.
                    let feed = if line == 0 {
                        machine.feed * lines.entry_feed_factor()
                    } else {
                        machine.feed
                    };
                    block.push(MotionCommand::LinearTo { x, y, z, feed });

                    if line + 1 < lines.line_count() {
                        x += lines.x_increment();
                        block.push(MotionCommand::LinearTo {
                            x,
                            y,
                            z,
                            feed: machine.feed,
                        });
                    }
                }
            }
        }
        block.push(MotionCommand::RetractToSafe);
        block
    }
}
