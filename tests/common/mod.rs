// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{create_project, TestCorpus};
#[allow(unused_imports)]
pub use helpers::{create_shared_services, create_test_services, field_values, test_config};
