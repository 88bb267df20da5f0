//! Asset Host API Tests

mod asset_host_tests;
