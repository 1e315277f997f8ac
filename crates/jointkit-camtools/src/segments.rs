//! Segment planning along the joint axis.
//!
//! A box joint alternates boxes (material removed) and teeth (material
//! kept) across the joint width. The planner lays out the segment
//! boundaries once; the odd and even cutting passes both derive their
//! active segments from the same plan.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};

const EPS: f64 = 1e-9;

/// Which set of alternating boxes a pass removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutParity {
    /// The 1st, 3rd, 5th... boxes.
    Odd,
    /// The 2nd, 4th, 6th... boxes.
    Even,
}

/// A contiguous span along the joint axis, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Inputs to the segment planner.
#[derive(Debug, Clone, Copy)]
pub struct SegmentPlanner {
    /// Total joint width along X (mm).
    pub total_width: f64,
    /// Width of the odd boxes (mm).
    pub width_odd: f64,
    /// Width of the even boxes (mm).
    pub width_even: f64,
    /// Clearance the tool may use beyond the stock edges (mm).
    pub margin: f64,
    /// Signed fit tweak distributed over the box edges (mm).
    pub fit_offset: f64,
    /// Tool diameter (mm).
    pub tool_diameter: f64,
}

impl SegmentPlanner {
    /// Lays out the joint. The only fallible step of the whole generator:
    /// a rejected configuration produces no motion at all.
    pub fn plan(&self) -> ParameterResult<SegmentPlan> {
        self.validate()?;

        // Greedy alternating accumulation, odd width first.
        let mut boundaries = vec![0.0];
        let mut position = 0.0;
        let mut index = 0usize;
        loop {
            let next = if index % 2 == 0 {
                self.width_odd
            } else {
                self.width_even
            };
            if position + next > self.total_width + EPS {
                break;
            }
            position += next;
            boundaries.push(position);
            index += 1;
        }

        // Balance any leftover as two half-width end segments. The inserted
        // leading segment shifts every box parity by one.
        let remainder = self.total_width - position;
        let parity_inverted = remainder > EPS;
        if parity_inverted {
            let half = remainder / 2.0;
            for boundary in &mut boundaries {
                *boundary += half;
            }
            boundaries.insert(0, 0.0);
            boundaries.push(self.total_width);
        }

        Ok(SegmentPlan {
            boundaries,
            remainder: if parity_inverted { remainder } else { 0.0 },
            parity_inverted,
            margin: self.margin,
            fit_offset: self.fit_offset,
            tool_diameter: self.tool_diameter,
        })
    }

    fn validate(&self) -> ParameterResult<()> {
        if self.total_width <= 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "total_width".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        for (name, width) in [
            ("box_width_odd", self.width_odd),
            ("box_width_even", self.width_even),
        ] {
            if width <= 0.0 {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: "must be positive".to_string(),
                });
            }
            if width > self.total_width + EPS {
                return Err(ParameterError::Incompatible(format!(
                    "{name} ({width} mm) exceeds the total joint width ({} mm)",
                    self.total_width
                )));
            }
            if width - self.fit_offset.abs() < self.tool_diameter - EPS {
                return Err(ParameterError::Incompatible(format!(
                    "{name} ({width} mm) leaves less than the tool diameter \
                     ({} mm) to cut after the fit offset",
                    self.tool_diameter
                )));
            }
        }
        Ok(())
    }
}

/// Boundary layout for one joint, shared by the odd and even passes.
#[derive(Debug, Clone)]
pub struct SegmentPlan {
    boundaries: Vec<f64>,
    remainder: f64,
    parity_inverted: bool,
    margin: f64,
    fit_offset: f64,
    tool_diameter: f64,
}

impl SegmentPlan {
    /// All segments in order, before fit and edge adjustments.
    pub fn segments(&self) -> Vec<Segment> {
        self.boundaries
            .windows(2)
            .map(|pair| Segment {
                start: pair[0],
                end: pair[1],
            })
            .collect()
    }

    pub fn segment_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// True when balancing end segments were inserted.
    pub fn parity_inverted(&self) -> bool {
        self.parity_inverted
    }

    /// Index of the first segment removed by a pass of the given parity.
    pub fn first_active_index(&self, parity: CutParity) -> usize {
        let base = match parity {
            CutParity::Odd => 0,
            CutParity::Even => 1,
        };
        if self.parity_inverted {
            base ^ 1
        } else {
            base
        }
    }

    /// Signed fit offset of boundary `n` for a pass of the given parity:
    /// +fit on boundaries whose index parity matches the request, -fit on
    /// the rest, so one edge of every box tightens while the opposite edge
    /// loosens. Cutting the mating board with the opposite parity and a
    /// negated fit reproduces the same boundary offsets, which is what
    /// makes the two boards mesh.
    pub fn boundary_offset(&self, n: usize, parity: CutParity) -> f64 {
        let keyed = match parity {
            CutParity::Odd => 1,
            CutParity::Even => 0,
        };
        if n % 2 == keyed {
            self.fit_offset
        } else {
            -self.fit_offset
        }
    }

    /// The segments removed by a pass of the given parity: every other
    /// segment, fit offsets applied, and the outermost edges widened clear
    /// of the stock.
    pub fn active_segments(&self, parity: CutParity) -> Vec<Segment> {
        let last = self.boundaries.len() - 1;
        let edge = self.edge_widening();
        (self.first_active_index(parity)..self.segment_count())
            .step_by(2)
            .map(|i| {
                let mut start = self.boundaries[i] + self.boundary_offset(i, parity);
                let mut end = self.boundaries[i + 1] + self.boundary_offset(i + 1, parity);
                if i == 0 {
                    start -= edge;
                }
                if i + 1 == last {
                    end += edge;
                }
                Segment { start, end }
            })
            .collect()
    }

    /// Outward widening of the first and last boundary. Only needed when a
    /// narrow remainder segment sits at the ends; it guarantees the tool
    /// fully clears the board edge through a segment thinner than itself.
    fn edge_widening(&self) -> f64 {
        if self.remainder > EPS {
            self.margin.max(self.tool_diameter - self.remainder / 2.0)
        } else {
            0.0
        }
    }
}
