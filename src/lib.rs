pub mod errors;
pub mod models;
pub mod freshness;
pub mod day_ahead;
pub mod cheapest;
pub mod state;
pub mod summary;
pub mod data_files;
pub mod config;
pub mod initialization;
