mod alignment;
pub use alignment::Alignment;

mod dp_matrix;
pub use dp_matrix::DpMatrix;

mod trace;
pub use trace::{Coordinate, MoveTag, TraceMatrix};
