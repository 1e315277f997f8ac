//! Travel and cutting totals over a finished block.

use crate::machine::MachineParams;
use crate::toolpath::{Block, MotionCommand};

/// Summary figures for one block.
///
/// Positions are resolved the way the machine would execute the block: the
/// tool starts at the XY origin at safe height, and `RetractToSafe` returns
/// it to `MachineParams::safe_height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockStats {
    /// Total rapid travel (mm), XY positioning and retracts.
    pub rapid_distance: f64,
    /// Total cutting travel (mm), plunges included.
    pub cut_distance: f64,
    /// Number of plunge moves.
    pub plunge_count: usize,
    /// Deepest Z reached (mm, negative below the stock top).
    pub deepest_z: f64,
    /// Estimated feed-limited cutting time (minutes). Rapids excluded.
    pub cutting_minutes: f64,
}

impl BlockStats {
    pub fn from_block(block: &Block, machine: &MachineParams) -> Self {
        let mut stats = Self::default();
        let (mut x, mut y) = (0.0_f64, 0.0_f64);
        let mut z = machine.safe_height;

        for command in &block.commands {
            match *command {
                MotionCommand::RapidTo { x: nx, y: ny } => {
                    stats.rapid_distance += (nx - x).hypot(ny - y);
                    x = nx;
                    y = ny;
                }
                MotionCommand::PlungeTo { z: nz, feed } => {
                    let travel = (nz - z).abs();
                    stats.cut_distance += travel;
                    stats.plunge_count += 1;
                    if feed > 0.0 {
                        stats.cutting_minutes += travel / feed;
                    }
                    z = nz;
                }
                MotionCommand::RetractToSafe => {
                    stats.rapid_distance += (machine.safe_height - z).abs();
                    z = machine.safe_height;
                }
                MotionCommand::LinearTo {
                    x: nx,
                    y: ny,
                    z: nz,
                    feed,
                } => {
                    let travel =
                        ((nx - x).powi(2) + (ny - y).powi(2) + (nz - z).powi(2)).sqrt();
                    stats.cut_distance += travel;
                    if feed > 0.0 {
                        stats.cutting_minutes += travel / feed;
                    }
                    x = nx;
                    y = ny;
                    z = nz;
                }
            }
            stats.deepest_z = stats.deepest_z.min(z);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_simple_slot() {
        let machine = MachineParams {
            safe_height: 5.0,
            ..MachineParams::default()
        };

        let mut block = Block::new("slot");
        block.push(MotionCommand::RapidTo { x: 10.0, y: 0.0 });
        block.push(MotionCommand::PlungeTo {
            z: -2.0,
            feed: 100.0,
        });
        block.push(MotionCommand::LinearTo {
            x: 40.0,
            y: 0.0,
            z: -2.0,
            feed: 600.0,
        });
        block.push(MotionCommand::RetractToSafe);

        let stats = BlockStats::from_block(&block, &machine);
        // Rapid: 10mm over, 7mm back up.
        assert!((stats.rapid_distance - 17.0).abs() < 1e-9);
        // Cut: 7mm plunge + 30mm slot.
        assert!((stats.cut_distance - 37.0).abs() < 1e-9);
        assert_eq!(stats.plunge_count, 1);
        assert_eq!(stats.deepest_z, -2.0);
        // 7mm at 100mm/min + 30mm at 600mm/min.
        assert!((stats.cutting_minutes - (7.0 / 100.0 + 30.0 / 600.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_block_is_all_zero() {
        let stats = BlockStats::from_block(&Block::new("empty"), &MachineParams::default());
        assert_eq!(stats, BlockStats::default());
    }
}
