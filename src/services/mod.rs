pub mod analytics;
mod ranking;
