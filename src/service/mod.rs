pub mod aggregator;
pub mod gameapi;
