//! Request data transfer objects

pub mod contact;
