// fcra/src/lib.rs

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod cli;
pub mod commands;
pub mod server;
