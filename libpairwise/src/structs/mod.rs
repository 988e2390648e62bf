pub mod scoring;
pub use scoring::{AlignmentMode, ScoringArityError, ScoringModel, ScoringParseError};

pub mod sequence;
pub use sequence::{EmptyFastaError, Sequence};
