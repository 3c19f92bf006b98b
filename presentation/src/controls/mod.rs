//! Interactive run controls

pub mod keys;
