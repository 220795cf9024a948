#![allow(dead_code)]
#![allow(unused_imports)]

pub mod app_config;
pub mod chart;
pub mod error;
pub mod indicator;
pub mod market;

pub const ENVIRONMENT_LOCAL: &str = "LOCAL";
