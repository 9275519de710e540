use office_core::{ClientClass, ClientId, CoreError, Requirement};
use office_random::RandomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("office configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("client profile error: {0}")]
    Profile(#[from] RandomError),

    #[error("no profile configured for class {0}")]
    MissingProfile(ClientClass),

    #[error("class {class} clients with requirement {requirement} cannot be served by any worker")]
    Unservable { class: ClientClass, requirement: Requirement },

    #[error("{0} reached a worker without a requirement")]
    Unclassified(ClientId),

    #[error("client id space exhausted")]
    TooManyClients,
}

pub type SimResult<T> = Result<T, SimError>;
