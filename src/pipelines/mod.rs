pub(crate) mod stats;

pub mod aspects;
pub mod review_summary;
pub mod sentiment;
pub mod summary;
