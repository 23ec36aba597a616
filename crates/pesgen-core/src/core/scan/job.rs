use super::order::InteractionOrder;
use super::range::ScanRange;

/// One independent scan: a single interaction type swept over a single range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanJob {
    pub order: InteractionOrder, // Body order of the scanned interaction
    pub type_index: u32,         // Type index as declared in the parameter file
    pub range: ScanRange,        // Distances visited by the scan
}

impl ScanJob {
    pub fn new(order: InteractionOrder, type_index: u32, range: ScanRange) -> Self {
        Self {
            order,
            type_index,
            range,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.range.sample_count()
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.range.samples()
    }

    /// Number of cluster geometries a full scan visits: every interatomic distance of
    /// the cluster runs over the sample grid independently.
    pub fn configuration_count(&self) -> u64 {
        (self.sample_count() as u64).saturating_pow(self.order.distance_count())
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.order, self.type_index)
    }
}
