pub mod job;
pub mod order;
pub mod range;
pub mod spec;

pub use job::ScanJob;
pub use order::InteractionOrder;
pub use range::{RangeError, ScanRange};
pub use spec::{ScanEntry, ScanError, ScanSpec};
