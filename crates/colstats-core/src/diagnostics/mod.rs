//! Descriptive statistics of a sample

mod moments;

pub use moments::{moments, MomentSummary};
