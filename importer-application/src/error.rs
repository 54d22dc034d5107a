use importer_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("ambiguous handler: command={command}, candidates={candidates}")]
    AmbiguousHandler {
        command: &'static str,
        candidates: usize,
    },

    #[error("dependency missing: {capability}")]
    DependencyMissing { capability: &'static str },

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
