//! src/lib.rs
pub mod chart;
pub mod chunk_splitter;
pub mod configuration;
pub mod error;
pub mod executors;
pub mod frequency;
pub mod functions;
pub mod mappers;
pub mod mapreduce;
pub mod reducers;
pub mod source;
pub mod startup;
pub mod telemetry;
#[cfg(test)]
mod test_utils;
