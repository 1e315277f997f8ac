//! Stepover line planning within one segment.

const EPS: f64 = 1e-9;

/// Layout of the back-and-forth passes that clear one segment width.
///
/// Line positions run from the segment start; consecutive lines are spaced
/// no wider than the stepover advance, so the pass footprints overlap into
/// gap-free coverage of the whole segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepoverPlan {
    line_count: usize,
    x_increment: f64,
    first_offset: f64,
    entry_feed_factor: f64,
}

impl StepoverPlan {
    /// Plans full coverage of `width` with a tool of `diameter` at the
    /// given stepover percentage (0 < percent < 100).
    pub fn for_width(width: f64, diameter: f64, stepover_percent: f64) -> Self {
        let entry_feed_factor = 1.0 - stepover_percent / 100.0;
        let advance = diameter * entry_feed_factor;

        if width <= diameter + EPS {
            // One centered pass already covers the full width.
            return Self {
                line_count: 1,
                x_increment: 0.0,
                first_offset: width / 2.0,
                entry_feed_factor,
            };
        }

        let line_count = 1 + ((width - diameter) / advance).ceil() as usize;
        let x_increment = (width - diameter) / (line_count - 1) as f64;
        Self {
            line_count,
            x_increment,
            first_offset: diameter / 2.0,
            entry_feed_factor,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Physical spacing between adjacent lines; zero for a single pass.
    pub fn x_increment(&self) -> f64 {
        self.x_increment
    }

    /// X of line `index`, measured from the segment start.
    pub fn line_offset(&self, index: usize) -> f64 {
        self.first_offset + index as f64 * self.x_increment
    }

    /// Feed multiplier for the first line of a segment, where the tool
    /// engages its full diameter instead of one stepover advance.
    pub fn entry_feed_factor(&self) -> f64 {
        self.entry_feed_factor
    }
}
