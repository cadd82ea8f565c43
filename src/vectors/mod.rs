//! Data tables of published known-answer vectors.
//! Each table exposes an explicit `register` function, nothing is registered implicitly.

pub mod gcm_spec;
