//! Request handlers

pub mod contact;
pub mod health;
