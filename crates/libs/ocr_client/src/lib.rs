#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod client;
mod prepare;

pub use client::*;
pub use prepare::*;
