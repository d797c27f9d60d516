//! Bedrock inference profile management.
//!
//! The crate lists an account's enabled regions and the application inference
//! profiles in a region. It creates profiles by copying from a system-defined
//! profile or a foundation model, deletes them, and shows their tags.
//!
//! Layers, bottom-up:
//! - [`api`] declares the backend seams; [`AwsConsole`] implements them over the AWS SDK.
//! - [`pagination`] and [`resources`] turn paged calls into complete listings and guard mutations.
//! - [`tag_editor`] and [`form`] hold the create-form validation.
//! - [`store`] is the console's state container: actions in, commands out.

pub mod api;
pub mod backends;
pub mod credentials;
pub mod error;
pub mod form;
pub mod pagination;
pub mod resources;
pub mod store;
pub mod tag_editor;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{AccountApi, BedrockApi, ConsoleApi};
pub use backends::aws::AwsConsole;
pub use credentials::{CredentialValues, Credentials};
pub use error::{ConsoleError, Result};

/// Region used when nothing else names one.
pub const DEFAULT_REGION: &str = "us-east-1";
