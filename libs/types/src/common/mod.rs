//! Common types shared by every order code creator

pub mod errors;
pub mod fixed_width;
pub mod identifiers;
pub mod sequence;
