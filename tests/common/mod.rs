#![allow(dead_code)]

pub mod fixtures;
pub mod pipeline;

pub use fixtures::*;
pub use pipeline::*;
