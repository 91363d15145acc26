//! Repository layer: read access to the symptom/disease catalog, plus the
//! inserts used when seeding it. The interview core never writes here.

mod association;
mod disease;
mod symptom;

pub use association::*;
pub use disease::*;
pub use symptom::*;
