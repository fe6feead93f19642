use crate::config::{GreetingConfig, MissingNamePolicy};
use crate::errors::Result;
use crate::event::{ResolvedName, resolve_name};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;

/// Payload carried, JSON-encoded, in [`GreetingResponse::body`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl GreetingResponse {
    /// Decodes `body` back into the greeting it carries.
    pub fn message(&self) -> Result<GreetingMessage> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub fn greet(name: &str) -> GreetingMessage {
    GreetingMessage {
        message: format!("Hello {name}, from a lambda function"),
    }
}

/// Turns an invocation event into a greeting response.
///
/// Holds no per-invocation state; one instance serves every invocation of
/// the process.
#[derive(Debug, Clone, Default)]
pub struct GreetingHandler {
    config: GreetingConfig,
}

impl GreetingHandler {
    pub fn new(config: GreetingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }

    pub fn handle(&self, event: &Value) -> Result<GreetingResponse> {
        let resolved = resolve_name(event)?;
        tracing::debug!(?resolved, "resolved greeting name");

        let name = self.display_name(&resolved);
        let body = serde_json::to_string(&greet(name))?;

        Ok(GreetingResponse {
            status_code: STATUS_OK,
            body,
        })
    }

    fn display_name<'a>(&'a self, resolved: &'a ResolvedName) -> &'a str {
        match resolved {
            ResolvedName::ArgumentsAbsent => &self.config.default_name,
            ResolvedName::NameAbsent => match self.config.missing_name {
                MissingNamePolicy::Placeholder => &self.config.placeholder,
                MissingNamePolicy::DefaultName => &self.config.default_name,
            },
            ResolvedName::Provided(name) => name,
        }
    }
}
