//! Order execution against the Deluthium RFQ API.

pub mod error;
pub mod executor;

pub use error::{ExecutorError, ExecutorResult};
pub use executor::QuoteExecutor;
