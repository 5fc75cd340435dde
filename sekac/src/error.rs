use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] sekcore::error::BackendError),
    #[error(transparent)]
    Value(#[from] sekcore::error::ValueError),
    /// Granting a permission name that was never seeded is an
    /// administrative error; merely checking one is just a deny.
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    #[error("unknown user: {0}")]
    UnknownUser(i64),
}
