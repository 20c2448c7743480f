//! Integration tests for VestiuBem.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and seed
//! cargo run -p vestiubem-cli -- migrate
//! cargo run -p vestiubem-cli -- seed -p <admin-password>
//!
//! # Start the server
//! cargo run -p vestiubem-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p vestiubem-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `VESTIUBEM_TEST_BASE_URL` - Server under test (default
//!   `http://localhost:3000`)
//! - `VESTIUBEM_TEST_ADMIN_PASSWORD` - Password of the seeded admin account

use reqwest::Client;
use serde_json::{Value, json};

/// Context for driving the server under test.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Create a fresh context with its own cookie jar.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = std::env::var("VESTIUBEM_TEST_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self { client, base_url }
    }

    /// Register a throwaway user and leave the session logged in.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the server rejects the registration.
    pub async fn register_user(&self, email: &str, password: &str) -> Value {
        let resp = self
            .client
            .post(format!("{}/api/auth/register", self.base_url))
            .json(&json!({
                "name": "Test User",
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to register test user");

        assert!(
            resp.status().is_success(),
            "registration failed: {}",
            resp.status()
        );
        resp.json().await.expect("Failed to parse user body")
    }

    /// Log in as the seeded admin account.
    ///
    /// # Panics
    ///
    /// Panics if `VESTIUBEM_TEST_ADMIN_PASSWORD` is unset or login fails.
    pub async fn login_as_admin(&self) {
        let password = std::env::var("VESTIUBEM_TEST_ADMIN_PASSWORD")
            .expect("VESTIUBEM_TEST_ADMIN_PASSWORD must be set for admin tests");

        let resp = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&json!({
                "email": "admin@vestiubem.com",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to log in as admin");

        assert!(
            resp.status().is_success(),
            "admin login failed: {}",
            resp.status()
        );
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A unique email for a test run, so reruns don't collide on the unique
/// constraint.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}+{}@test.vestiubem.com", uuid::Uuid::new_v4())
}
