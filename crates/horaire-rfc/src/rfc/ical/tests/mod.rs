//! Document-level tests for the serializer.

mod fixtures;
