//! Unit tests for notification construction and dispatch.
