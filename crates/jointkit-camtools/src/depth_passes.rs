//! Depth pass planning for multi-layer cuts.

/// Plans the ordered cutting depths needed to reach full stock thickness
/// with a fixed step-down per pass.
///
/// The last pass is clamped to the stock thickness exactly; no pass cuts
/// deeper than the stock.
#[derive(Debug, Clone, Copy)]
pub struct StepDownPlan {
    thickness: f64,
    step_down: f64,
}

impl StepDownPlan {
    /// Both values must be positive; callers validate before planning.
    pub fn new(thickness: f64, step_down: f64) -> Self {
        Self {
            thickness,
            step_down,
        }
    }

    /// Number of passes needed to reach full thickness.
    pub fn pass_count(&self) -> usize {
        (self.thickness / self.step_down).ceil().max(1.0) as usize
    }

    /// Ordered pass depths, shallowest first, each more negative than the
    /// previous, ending at the full thickness.
    pub fn pass_depths(&self) -> Vec<f64> {
        (1..=self.pass_count())
            .map(|pass| -(pass as f64 * self.step_down).min(self.thickness))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let plan = StepDownPlan::new(18.0, 6.0);
        assert_eq!(plan.pass_count(), 3);
        assert_eq!(plan.pass_depths(), vec![-6.0, -12.0, -18.0]);
    }

    #[test]
    fn test_last_pass_clamped() {
        let plan = StepDownPlan::new(10.0, 3.0);
        assert_eq!(plan.pass_count(), 4);
        assert_eq!(plan.pass_depths(), vec![-3.0, -6.0, -9.0, -10.0]);
    }

    #[test]
    fn test_thin_stock_single_pass() {
        let plan = StepDownPlan::new(4.0, 6.0);
        assert_eq!(plan.pass_count(), 1);
        assert_eq!(plan.pass_depths(), vec![-4.0]);
    }

    #[test]
    fn test_depths_strictly_decreasing_and_bounded() {
        for &(thickness, step) in &[(18.0, 5.0), (7.3, 2.0), (12.0, 12.0), (0.8, 6.0)] {
            let depths = StepDownPlan::new(thickness, step).pass_depths();
            assert_eq!(*depths.last().unwrap(), -thickness);
            for pair in depths.windows(2) {
                assert!(pair[1] < pair[0]);
            }
            for z in depths {
                assert!(z >= -thickness);
            }
        }
    }
}
