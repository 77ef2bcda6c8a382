pub mod cli;
pub mod config;
mod db;
pub mod hist;
pub mod imdb;
pub mod matcher;
pub mod server;
pub mod utils;

pub use config::Opts;
pub use imdb::{IMDB, IMDBBuilder};
