//! Mock implementations.
