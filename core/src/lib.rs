pub mod config;
pub mod errors;
pub mod event;
pub mod handler;
pub mod telemetry;

pub use config::{GreetingConfig, MissingNamePolicy, load_config};
pub use errors::{GreetingError, Result};
pub use handler::{GreetingHandler, GreetingMessage, GreetingResponse};
