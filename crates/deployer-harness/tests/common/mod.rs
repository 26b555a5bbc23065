//! Shared test helpers for deployer-harness integration tests.
//!
//! Provides environment scoping, logging setup, and a stand-in client type
//! for tests that resolve endpoints from the real process environment.

#![expect(
    dead_code,
    reason = "Test utilities shared across integration test modules"
)]

use std::env;

use deployer_harness::role::{ADDRESS_KEY, DCP_PORT_KEY, DEPLOYER_PORT_KEY};

/// Every key the harness reads.
pub const HARNESS_KEYS: [&str; 3] = [ADDRESS_KEY, DEPLOYER_PORT_KEY, DCP_PORT_KEY];

/// Install a fmt subscriber for test output. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("deployer_harness=trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Snapshot of the harness keys, restored on drop.
///
/// Clears every harness key on creation so each test starts from defaults.
/// Tests holding one must be `#[serial]`.
#[derive(Debug)]
pub struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
}

impl ScopedEnv {
    pub fn clean() -> Self {
        let saved = HARNESS_KEYS
            .iter()
            .map(|key| (*key, env::var(key).ok()))
            .collect();
        for key in HARNESS_KEYS {
            env::remove_var(key);
        }
        Self { saved }
    }

    pub fn set(&self, key: &str, value: &str) -> &Self {
        env::set_var(key, value);
        self
    }

    pub fn unset(&self, key: &str) -> &Self {
        env::remove_var(key);
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

/// Minimal stand-in for a deployer client: records the base URL it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingClient {
    pub base_url: String,
}

impl RecordingClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}
