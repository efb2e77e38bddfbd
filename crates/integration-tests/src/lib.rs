//! Integration tests for the workshop booking console.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p workshop-console-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_scenarios` - Walkthroughs from seeded data through forms, the
//!   reducer and the views
//! - `store_properties` - Property tests over generated states and actions
