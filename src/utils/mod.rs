// src/utils/mod.rs

pub mod slug;
