#![allow(dead_code)]

pub mod architecture;
pub mod fixture;
pub mod temp_db;
