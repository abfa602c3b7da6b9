//! Utility modules for model_helper

pub mod naming;

pub use naming::humanize;
