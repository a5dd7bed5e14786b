//! OpenRecSyst: command line shell for the recommender project.

pub mod args;
pub mod dataset;
pub mod process;
pub mod types;
