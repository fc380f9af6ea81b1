//! Error types for the step engine and the command line front end
//!
//! This module defines [`EngineError`], which covers everything that can go
//! wrong while building a step sequence or reading the configuration.
//!
//! An unknown operation identifier is *not* an error: the router reports it as
//! [`Selection::NotAvailable`](crate::router::Selection::NotAvailable) and the
//! UI shows an informational empty state instead.

use crate::catalog::{Family, Operation};
use std::fmt;

/// Errors raised by the engine or while reading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A generator tried to record more steps than the configured limit
    StepLimitExceeded { operation: Operation, limit: usize },

    /// A generator was handed an operation that belongs to another family
    FamilyMismatch {
        operation: Operation,
        expected: Family,
    },

    /// Playback speed outside the supported multipliers
    InvalidSpeed { value: String },

    /// Display scale outside the supported range
    InvalidScale { value: String },

    /// A command line flag expects a value that was not given
    MissingArgument { flag: String },

    /// Unrecognised command line flag
    UnknownFlag { flag: String },

    /// Logging could not be set up (bad filter, unwritable log file)
    LoggingSetup { message: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StepLimitExceeded { operation, limit } => {
                write!(
                    f,
                    "Step limit exceeded while generating '{}': limit is {} steps",
                    operation.id(),
                    limit
                )
            }
            EngineError::FamilyMismatch {
                operation,
                expected,
            } => {
                write!(
                    f,
                    "Operation '{}' is not part of the {} family",
                    operation.id(),
                    expected.name()
                )
            }
            EngineError::InvalidSpeed { value } => {
                write!(
                    f,
                    "Invalid speed '{}': expected one of 0.5, 1, 1.5, 2",
                    value
                )
            }
            EngineError::InvalidScale { value } => {
                write!(
                    f,
                    "Invalid scale '{}': expected a number between 0.5 and 2",
                    value
                )
            }
            EngineError::MissingArgument { flag } => {
                write!(f, "Flag '{}' expects a value", flag)
            }
            EngineError::UnknownFlag { flag } => {
                write!(f, "Unknown flag '{}'", flag)
            }
            EngineError::LoggingSetup { message } => {
                write!(f, "Failed to set up logging: {}", message)
            }
        }
    }
}

impl std::error::Error for EngineError {}
