//! Entity ↔ model mappers

mod follow;
mod user;
mod weet;
