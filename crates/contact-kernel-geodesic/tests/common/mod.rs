//! Shared test utilities for geodesic integration tests.

pub mod sampling;
