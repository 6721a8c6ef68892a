pub mod core;
pub mod fetcher;
pub mod mutator;
