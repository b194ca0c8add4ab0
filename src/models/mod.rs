// src/models/mod.rs

pub mod company;
pub mod industry;
pub mod invoice;
