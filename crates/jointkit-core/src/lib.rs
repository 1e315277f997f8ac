//! # JointKit Core
//!
//! Shared data model for JointKit. Provides the machine parameters supplied
//! by the host application, the motion command and block model produced by
//! the CAM tool generators, and the host document the finished blocks are
//! inserted into.
//!
//! ## Core Components
//!
//! - **MachineParams**: read-only machine scalars (feeds, step-down, tool)
//! - **MotionCommand / Block**: ordered motion sequences as immutable values
//! - **GcodeDocument**: the host block list generators insert into
//! - **BlockStats**: travel and cutting totals over a finished block

pub mod document;
pub mod machine;
pub mod stats;
pub mod toolpath;

pub use document::GcodeDocument;
pub use machine::MachineParams;
pub use stats::BlockStats;
pub use toolpath::{Block, MotionCommand};
