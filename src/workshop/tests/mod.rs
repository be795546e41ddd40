//! Unit tests for the workshop store and service.
