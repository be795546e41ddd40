//! Unit tests for the workforce domain.
