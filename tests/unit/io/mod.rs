pub mod cli;
pub mod export;
