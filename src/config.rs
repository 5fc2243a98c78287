use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "social_graph", author, version, about)]
pub struct Config {
    /// Path to a `user,friend` CSV file describing the network.
    ///
    /// If omitted, the built-in sample network is used.
    #[arg(short, long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every user and their friends.
    Show,
    /// List a user's direct friends.
    Friends { user: String },
    /// List the friends two users have in common.
    Mutual { a: String, b: String },
    /// Suggest friends-of-friends for a user.
    Suggest { user: String },
    /// Find the shortest connection between two users.
    Path {
        from: String,
        to: String,
        #[arg(short, long, value_enum, default_value_t = Algorithm::Bfs)]
        algorithm: Algorithm,
    },
    /// Rank users by number of friends and report the largest friend cluster.
    Stats {
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Run every query against the network (default).
    Demo,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}
