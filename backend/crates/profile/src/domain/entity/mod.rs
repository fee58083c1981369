//! Entity Module

pub mod education;
pub mod experience;
pub mod profile;
pub mod repo;
