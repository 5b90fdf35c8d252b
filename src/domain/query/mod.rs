pub mod descriptor;
pub mod ordering;

pub use descriptor::RequestDescriptor;
pub use ordering::{DateWindow, ScoreRange, SortOrder};
