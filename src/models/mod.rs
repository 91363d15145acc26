pub mod association;
pub mod disease;
pub mod enums;
pub mod symptom;

pub use association::*;
pub use disease::*;
pub use symptom::*;

/// Row id of a `symptoms` record.
pub type SymptomId = i64;

/// Row id of a `diseases` record.
pub type DiseaseId = i64;
