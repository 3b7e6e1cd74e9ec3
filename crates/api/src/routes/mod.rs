//! Route Handlers

pub mod fitness;
