//! Unit tests for the task domain.
