//! # Deployer Harness
//!
//! Test-support helpers for integration suites that drive a deployer service.
//!
//! The harness resolves where the deployer (and its DCP variant) listens from
//! configuration, normalizes that into a base URL, and hands it to whatever
//! client constructor the suite uses. The client itself lives elsewhere.
//!
//! ```
//! use deployer_harness::{DeployerRole, EndpointResolver, StaticConfigSource};
//!
//! let source = StaticConfigSource::new().with("DEPLOYER_ADDRESS", " deployer.test ");
//! let resolver = EndpointResolver::new(source);
//!
//! assert_eq!(resolver.base_url(DeployerRole::Deployer), "http://deployer.test:18000");
//! assert_eq!(resolver.base_url(DeployerRole::Dcp), "http://deployer.test:18001");
//! ```
//!
//! Configuration keys:
//!
//! | Key | Role | Default |
//! |---|---|---|
//! | `DEPLOYER_ADDRESS` | both | `localhost` |
//! | `DEPLOYER_PORT` | deployer | `18000` |
//! | `DEPLOYER_DCP_PORT` | dcp | `18001` |

pub mod config;
pub mod endpoint;
pub mod error;
pub mod resolver;
pub mod role;

pub use crate::config::{layered_config, ConfigSource, EnvConfigSource, StaticConfigSource};
pub use crate::endpoint::{has_scheme, normalize, Endpoint};
pub use crate::error::{HarnessError, HarnessResult};
pub use crate::resolver::{ClientConstructor, DeployerEndpoints, EndpointResolver};
pub use crate::role::DeployerRole;

/// Client for the primary deployer, addressed from the process environment.
pub fn deployer<F: ClientConstructor>(constructor: F) -> F::Client {
    EndpointResolver::from_env().deployer(constructor)
}

/// Client for the DCP instance, addressed from the process environment.
pub fn dcp<F: ClientConstructor>(constructor: F) -> F::Client {
    EndpointResolver::from_env().dcp(constructor)
}
