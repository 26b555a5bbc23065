//! Endpoint resolution for deployer test clients.
//!
//! `EndpointResolver` reads the shared address key and the role's port key
//! from its [`ConfigSource`], falls back to defaults for absent keys, and
//! hands the normalized base URL to a caller-supplied client constructor.
//! It performs no I/O of its own; connecting is the client's business.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{ConfigSource, EnvConfigSource};
use crate::endpoint::Endpoint;
use crate::role::{DeployerRole, ADDRESS_KEY, DEFAULT_ADDRESS};

/// Builds a client from a fully qualified base URL.
///
/// Implemented for any `Fn(String) -> C`, so a client's own constructor
/// (`DeployerClient::new`) can be passed directly. Fallible constructors
/// simply return a `Result` as their client type.
pub trait ClientConstructor {
    type Client;

    fn construct(&self, base_url: String) -> Self::Client;
}

impl<F, C> ClientConstructor for F
where
    F: Fn(String) -> C,
{
    type Client = C;

    fn construct(&self, base_url: String) -> C {
        self(base_url)
    }
}

/// Endpoints of both roles, resolved from one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployerEndpoints {
    pub deployer: Endpoint,
    pub dcp: Endpoint,
}

impl DeployerEndpoints {
    pub fn get(&self, role: DeployerRole) -> &Endpoint {
        match role {
            DeployerRole::Deployer => &self.deployer,
            DeployerRole::Dcp => &self.dcp,
        }
    }
}

/// Resolves deployer endpoints from an injected configuration source.
#[derive(Debug, Clone, Default)]
pub struct EndpointResolver<S = EnvConfigSource> {
    source: S,
}

impl EndpointResolver<EnvConfigSource> {
    /// Resolver over the process environment.
    pub fn from_env() -> Self {
        Self::new(EnvConfigSource)
    }
}

impl<S: ConfigSource> EndpointResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the endpoint for `role` without constructing a client.
    pub fn endpoint(&self, role: DeployerRole) -> Endpoint {
        let address = self.lookup(ADDRESS_KEY, DEFAULT_ADDRESS);
        let port = self.lookup(role.port_key(), role.default_port());
        Endpoint::new(role, address, port)
    }

    pub fn base_url(&self, role: DeployerRole) -> String {
        self.endpoint(role).base_url()
    }

    /// Resolve both roles from the current snapshot.
    pub fn endpoints(&self) -> DeployerEndpoints {
        DeployerEndpoints {
            deployer: self.endpoint(DeployerRole::Deployer),
            dcp: self.endpoint(DeployerRole::Dcp),
        }
    }

    /// Resolve `role` and build a client bound to its base URL.
    ///
    /// Returns whatever the constructor returns. Each call constructs a new
    /// client, even when the configuration has not changed.
    pub fn resolve<F>(&self, role: DeployerRole, constructor: F) -> F::Client
    where
        F: ClientConstructor,
    {
        let base_url = self.base_url(role);
        debug!(role = %role, base_url = %base_url, "Resolved deployer endpoint");
        constructor.construct(base_url)
    }

    /// Client for the primary deployer.
    pub fn deployer<F>(&self, constructor: F) -> F::Client
    where
        F: ClientConstructor,
    {
        self.resolve(DeployerRole::Deployer, constructor)
    }

    /// Client for the DCP instance.
    pub fn dcp<F>(&self, constructor: F) -> F::Client
    where
        F: ClientConstructor,
    {
        self.resolve(DeployerRole::Dcp, constructor)
    }

    fn lookup(&self, key: &str, default: &str) -> String {
        match self.source.get(key) {
            Some(value) => value,
            None => {
                trace!(key, default, "Configuration key unset, using default");
                default.to_string()
            }
        }
    }
}
