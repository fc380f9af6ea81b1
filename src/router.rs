//! Selection router
//!
//! Resolves an operation identifier to an [`Operation`] once, then dispatches
//! to the generator registered for the operation's [`Family`]. Identifiers
//! outside the catalog select [`Selection::NotAvailable`].

use crate::catalog::{Family, Operation};
use crate::errors::EngineError;
use crate::generators::{self, GeneratorFn};
use crate::snapshot::OperationSequence;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Outcome of selecting an operation identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ready(OperationSequence),
    /// The identifier is not in the catalog; the view shows an empty state
    NotAvailable { id: String },
}

impl Selection {
    pub fn sequence(&self) -> Option<&OperationSequence> {
        match self {
            Selection::Ready(sequence) => Some(sequence),
            Selection::NotAvailable { .. } => None,
        }
    }

    /// Number of steps, 0 when not available
    pub fn total_steps(&self) -> usize {
        self.sequence().map_or(0, OperationSequence::len)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Selection::Ready(_))
    }
}

pub struct Router {
    operations: FxHashMap<&'static str, Operation>,
    generators: FxHashMap<Family, GeneratorFn>,
}

impl Default for Router {
    fn default() -> Self {
        Router::new()
    }
}

impl Router {
    /// Router over the full catalog
    pub fn new() -> Self {
        let operations = Operation::ALL.iter().map(|op| (op.id(), *op)).collect();
        let generators = Family::ALL
            .iter()
            .map(|family| (*family, generators::for_family(*family)))
            .collect();
        Router {
            operations,
            generators,
        }
    }

    /// Look up an identifier without generating anything
    pub fn resolve(&self, id: &str) -> Option<Operation> {
        self.operations.get(id.trim()).copied()
    }

    /// Generate the sequence for an identifier
    pub fn select(&self, id: &str) -> Result<Selection, EngineError> {
        match self.resolve(id) {
            Some(operation) => self.select_operation(operation),
            None => {
                info!(id, "operation not available");
                Ok(Selection::NotAvailable { id: id.to_string() })
            }
        }
    }

    pub fn select_operation(&self, operation: Operation) -> Result<Selection, EngineError> {
        let family = operation.family();
        let Some(generate) = self.generators.get(&family) else {
            return Ok(Selection::NotAvailable {
                id: operation.id().to_string(),
            });
        };
        let sequence = generate(operation)?;
        debug!(
            operation = operation.id(),
            family = family.name(),
            steps = sequence.len(),
            "operation selected"
        );
        Ok(Selection::Ready(sequence))
    }
}
