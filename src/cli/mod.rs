//! Entry-point workflow, decoupled from process setup in main.rs

pub mod orchestration;
