use tessera_graph_ir::MalformedIdentifierError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuilderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The value factory rejected a subject, type or predicate string.
    #[error(transparent)]
    MalformedIdentifier(#[from] MalformedIdentifierError),
}
