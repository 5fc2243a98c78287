use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetworkError>;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum NetworkError {
    /// Every referenced label that is not in the network, in argument order.
    #[error("unknown user(s): {}", quoted(.0))]
    UnknownUser(Vec<String>),

    #[error("user '{0}' cannot befriend themselves")]
    SelfFriendship(String),
}

fn quoted(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!("'{}'", label))
        .collect::<Vec<_>>()
        .join(", ")
}
