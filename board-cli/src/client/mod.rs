mod client;
pub mod error;

pub use client::Client;
pub use error::{ClientError, ClientResult};
