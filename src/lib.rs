//! Social network graph: users, friendships, and relationship queries.
//!
//! The network is an undirected graph keyed by user label. Queries never print;
//! they return values or a [NetworkError].

pub mod adjacency_lists;
pub mod data_cleaning;
pub mod error;
pub mod graph_analysis;

pub use adjacency_lists::SocialNetwork;
pub use error::{NetworkError, Result};
pub use graph_analysis::PathOutcome;
