//! Motion commands and named blocks.

use serde::{Deserialize, Serialize};

/// A single machine motion, in the order the machine executes it.
///
/// Rapid XY moves happen at whatever depth the tool currently sits at; the
/// host is responsible for never requesting a rapid through stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MotionCommand {
    /// Rapid positioning move in the XY plane.
    RapidTo { x: f64, y: f64 },
    /// Feed move straight down to a cutting depth.
    PlungeTo { z: f64, feed: f64 },
    /// Rapid retract to the machine safe height.
    RetractToSafe,
    /// Cutting move at the given feed rate.
    LinearTo { x: f64, y: f64, z: f64, feed: f64 },
}

/// A named, ordered motion sequence.
///
/// Blocks are the unit of insertion into the host document; once built they
/// are never mutated, only handed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub commands: Vec<MotionCommand>,
}

impl Block {
    /// Creates an empty block with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Appends a command, preserving execution order.
    pub fn push(&mut self, command: MotionCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
