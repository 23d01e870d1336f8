//! GraphQL schema and endpoint configuration

use crate::error::ConfigResult;
use crate::validation::{validate_endpoint_path, validate_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GraphQL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLConfig {
    /// Path the GraphQL endpoint is mounted on
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Serve the GraphiQL UI on browser GET requests
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_graphiql: bool,

    /// Pretty-print JSON responses
    #[serde(default = "crate::domains::utils::default_true")]
    pub pretty: bool,

    /// Allow introspection queries
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_introspection: bool,

    /// Maximum query depth
    #[serde(default = "default_max_query_depth")]
    pub max_query_depth: Option<usize>,

    /// Maximum query complexity
    #[serde(default = "default_max_query_complexity")]
    pub max_query_complexity: Option<usize>,

    /// What resolvers do with the fetched resource
    #[serde(default)]
    pub resolve_mode: ResolveMode,
}

/// Resolver behaviour for generated root fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Return the fetched resource and surface API errors
    #[default]
    Forward,
    /// Perform the API call, then drop the result and any error
    Discard,
}

impl ResolveMode {
    /// Whether the API credential must be present for this mode
    pub fn requires_credentials(&self) -> bool {
        matches!(self, ResolveMode::Forward)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveMode::Forward => "forward",
            ResolveMode::Discard => "discard",
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(ResolveMode::Forward),
            "discard" => Ok(ResolveMode::Discard),
            _ => Err(format!("Invalid resolve mode: {}", s)),
        }
    }
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            enable_graphiql: true,
            pretty: true,
            enable_introspection: true,
            max_query_depth: default_max_query_depth(),
            max_query_complexity: default_max_query_complexity(),
            resolve_mode: ResolveMode::default(),
        }
    }
}

impl Validatable for GraphQLConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_endpoint_path(&self.endpoint, "endpoint", self.domain_name())?;

        if let Some(depth) = self.max_query_depth {
            validate_positive(depth, "max_query_depth", self.domain_name())?;
        }

        if let Some(complexity) = self.max_query_complexity {
            validate_positive(complexity, "max_query_complexity", self.domain_name())?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "graphql"
    }
}

// Default value functions
fn default_endpoint() -> String {
    "/graphql".to_string()
}

fn default_max_query_depth() -> Option<usize> {
    Some(15)
}

fn default_max_query_complexity() -> Option<usize> {
    Some(1000)
}
