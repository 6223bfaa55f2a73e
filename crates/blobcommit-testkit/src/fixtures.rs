//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use rand::RngCore;

use blobcommit::{Engine, EngineConfig, PreparedBlob, QueueCommand, Result};
use blobcommit_core::{Blob, Namespace};

/// Signer used by fixtures unless one is given.
pub const TEST_SIGNER: &str = "celestia1testsigner000000000000000000000000";

/// A test fixture with an engine, a signer and a namespace.
pub struct TestFixture {
    pub engine: Engine,
    pub signer: String,
    pub namespace: Namespace,
}

impl TestFixture {
    /// Create a new test fixture with a random namespace.
    pub fn new() -> Self {
        Self::with_namespace(Namespace::random())
    }

    /// Create with a fixed namespace.
    pub fn with_namespace(namespace: Namespace) -> Self {
        Self {
            engine: Engine::default(),
            signer: TEST_SIGNER.to_string(),
            namespace,
        }
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = Engine::new(config);
        self
    }

    /// Namespace as hex, the way callers hand it to the engine.
    pub fn namespace_hex(&self) -> String {
        self.namespace.id_hex()
    }

    /// Wrap raw bytes in a blob under the fixture's namespace.
    pub fn make_blob(&self, data: &[u8]) -> Blob {
        Blob::new(self.namespace, data.to_vec())
    }

    /// Blob of `len` random bytes.
    pub fn make_random_blob(&self, len: usize) -> Blob {
        let mut data = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut data);
        Blob::new(self.namespace, data)
    }

    /// Prepare an `AddToQueue` command for `url`.
    pub fn queue(&self, url: &str) -> Result<PreparedBlob> {
        self.engine.prepare_blob(
            &self.signer,
            &self.namespace_hex(),
            &QueueCommand::add_to_queue(url),
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures with distinct, deterministic namespaces.
pub fn multi_namespace_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut id = [0u8; 28];
            id[20..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
            TestFixture::with_namespace(Namespace::new(0, id))
        })
        .collect()
}
