//! Backend implementations of the console's API seams.

pub mod aws;
