//! # JointKit CAM Tools
//!
//! This crate provides CAM (Computer-Aided Manufacturing) tool generators
//! for woodworking joinery patterns. Each generator turns user parameters
//! plus the host's machine parameters into named blocks of motion commands
//! and inserts them into the host document.
//!
//! ## CAM Tools Included
//!
//! - **Box Joint Maker**: interlocking rectangular-tooth joints cut into the
//!   edge of two mating boards
//! - **Feed-rate Test**: a sweep of calibration slots, one pair per
//!   candidate feed rate
//!
//! ## Supporting Infrastructure
//!
//! - **Depth Passes**: step-down layering to full stock thickness
//! - **Segments**: alternating box layout along the joint axis
//! - **Stepover**: back-and-forth line planning within one segment
//! - **Errors**: parameter validation with host-displayable messages

pub mod box_joint;
pub mod depth_passes;
pub mod error;
pub mod segments;
pub mod stepover;

// Re-export commonly used items
pub use box_joint::{BoxJointGenerator, BoxJointParameters};
pub use depth_passes::StepDownPlan;
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use feedrate_test::{FeedrateTestGenerator, FeedrateTestParameters};
pub use segments::{CutParity, Segment, SegmentPlan, SegmentPlanner};
pub use stepover::StepoverPlan;
