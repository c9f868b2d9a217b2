pub mod llrb_base;
pub mod llrb_map;

pub use llrb_base::verify::Violations;
pub use llrb_map::{LlrbMap, OrderedMap, VerifiedOrderedMap};
