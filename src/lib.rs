#[macro_use]
extern crate log;

pub mod command;
pub mod report;

pub use crate::command::{Command, Config, LogTarget};
