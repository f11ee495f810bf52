use crate::engine::{EditDistance, UNBOUNDED};
use crate::traits::CostPolicy;

/// Step-by-step construction of an [`EditDistance`] engine.
///
/// ```
/// use weighted_edit::{policy::UnitCost, EditDistanceBuilder};
///
/// let engine = EditDistanceBuilder::new(UnitCost).with_threshold(2.0).build();
/// assert!(engine.run("kitten", "sitting").is_err());
/// ```
pub struct EditDistanceBuilder<P: CostPolicy> {
    policy: P,
    threshold: Option<f64>,
}

impl<P: CostPolicy> EditDistanceBuilder<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            threshold: None,
        }
    }
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
    pub fn build(self) -> EditDistance<P> {
        EditDistance::with_threshold(self.policy, self.threshold.unwrap_or(UNBOUNDED))
    }
}
