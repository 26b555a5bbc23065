//! Deployer service roles.
//!
//! A test suite talks to two deployer instances: the deployer itself and its
//! DCP variant. Both share one address key but read their port from distinct
//! keys with distinct defaults, so changing one never moves the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

/// Configuration key holding the deployer host, shared by both roles.
pub const ADDRESS_KEY: &str = "DEPLOYER_ADDRESS";
/// Port key for the deployer role.
pub const DEPLOYER_PORT_KEY: &str = "DEPLOYER_PORT";
/// Port key for the DCP role.
pub const DCP_PORT_KEY: &str = "DEPLOYER_DCP_PORT";

/// Host used when [`ADDRESS_KEY`] is absent.
pub const DEFAULT_ADDRESS: &str = "localhost";
/// Port used when [`DEPLOYER_PORT_KEY`] is absent.
pub const DEFAULT_DEPLOYER_PORT: &str = "18000";
/// Port used when [`DCP_PORT_KEY`] is absent.
pub const DEFAULT_DCP_PORT: &str = "18001";

/// Which deployer instance an endpoint points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployerRole {
    /// The primary deployer service
    Deployer,
    /// The secondary DCP instance
    Dcp,
}

impl DeployerRole {
    /// Every role, in resolution order.
    pub const ALL: [DeployerRole; 2] = [DeployerRole::Deployer, DeployerRole::Dcp];

    /// Configuration key this role reads its port from.
    pub fn port_key(self) -> &'static str {
        match self {
            Self::Deployer => DEPLOYER_PORT_KEY,
            Self::Dcp => DCP_PORT_KEY,
        }
    }

    /// Port used when [`Self::port_key`] is absent.
    pub fn default_port(self) -> &'static str {
        match self {
            Self::Deployer => DEFAULT_DEPLOYER_PORT,
            Self::Dcp => DEFAULT_DCP_PORT,
        }
    }

    /// Lowercase role name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deployer => "deployer",
            Self::Dcp => "dcp",
        }
    }
}

impl fmt::Display for DeployerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployerRole {
    type Err = HarnessError;

    /// Accepts the role names as well as `primary` / `secondary`.
    fn from_str(s: &str) -> HarnessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deployer" | "primary" => Ok(Self::Deployer),
            "dcp" | "secondary" => Ok(Self::Dcp),
            _ => Err(HarnessError::unknown_role(s)),
        }
    }
}
