use anyhow::Result;
use clap::Parser;
use log::warn;

use social_graph::{data_cleaning, graph_analysis, PathOutcome, SocialNetwork};

use crate::config::{Algorithm, Command, Config};

mod config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();
    let network = match &config.input {
        Some(path) => SocialNetwork::from_records(&data_cleaning::parse_csv(path)?),
        None => sample_network()?,
    };

    match config.command.unwrap_or(Command::Demo) {
        Command::Show => print!("{}", network),
        Command::Friends { user } => print_friends(&network, &user),
        Command::Mutual { a, b } => print_mutual(&network, &a, &b),
        Command::Suggest { user } => print_suggestions(&network, &user),
        Command::Path {
            from,
            to,
            algorithm,
        } => print_path(&network, &from, &to, algorithm),
        Command::Stats { top } => print_stats(&network, top),
        Command::Demo => demo(&network),
    }
    Ok(())
}

/// Eight users and eight friendships; Grace has no friends.
fn sample_network() -> Result<SocialNetwork> {
    let mut network = SocialNetwork::new();
    for user in [
        "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi",
    ] {
        network.add_user(user);
    }
    for (a, b) in [
        ("Alice", "Bob"),
        ("Alice", "Charlie"),
        ("Bob", "David"),
        ("Charlie", "David"),
        ("Charlie", "Eve"),
        ("David", "Eve"),
        ("Eve", "Frank"),
        ("Frank", "Heidi"),
    ] {
        network.add_friendship(a, b)?;
    }
    Ok(network)
}

fn demo(network: &SocialNetwork) {
    println!("--- Social Network Graph ---");
    print!("{}", network);

    println!("\n--- Friends ---");
    for user in ["Charlie", "Grace", "Nobody"] {
        print_friends(network, user);
    }

    println!("\n--- Mutual Friends ---");
    for (a, b) in [("Alice", "David"), ("Bob", "Eve"), ("Alice", "Nobody")] {
        print_mutual(network, a, b);
    }

    println!("\n--- Friend Suggestions ---");
    for user in ["Alice", "Bob", "Grace"] {
        print_suggestions(network, user);
    }

    println!("\n--- Shortest Paths ---");
    for (from, to) in [
        ("Alice", "Eve"),
        ("Bob", "Heidi"),
        ("Alice", "Grace"),
        ("Heidi", "Heidi"),
    ] {
        print_path(network, from, to, Algorithm::Bfs);
    }
    print_path(network, "Alice", "Heidi", Algorithm::Dijkstra);
    print_path(network, "Alice", "Nobody", Algorithm::Dijkstra);

    println!("\n--- Network Stats ---");
    print_stats(network, 3);
}

fn quoted<'a>(labels: impl IntoIterator<Item = &'a String>) -> String {
    labels
        .into_iter()
        .map(|label| format!("'{}'", label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_friends(network: &SocialNetwork, user: &str) {
    match network.friends(user) {
        Ok(friends) => println!("'{}'s friends: {{{}}}", user, quoted(friends)),
        Err(err) => warn!("friends of '{}': {}", user, err),
    }
}

fn print_mutual(network: &SocialNetwork, a: &str, b: &str) {
    match graph_analysis::mutual_friends(network, a, b) {
        Ok(mutual) => println!(
            "Mutual friends between '{}' and '{}': {{{}}}",
            a,
            b,
            quoted(&mutual)
        ),
        Err(err) => warn!("mutual friends of '{}' and '{}': {}", a, b, err),
    }
}

fn print_suggestions(network: &SocialNetwork, user: &str) {
    match graph_analysis::suggest_friends(network, user) {
        Ok(suggestions) => {
            println!("Friend suggestions for '{}':", user);
            if suggestions.is_empty() {
                println!("  None.");
            }
            for (candidate, count) in &suggestions {
                println!("  - '{}' (via {} connection(s))", candidate, count);
            }
        }
        Err(err) => warn!("suggestions for '{}': {}", user, err),
    }
}

fn print_path(network: &SocialNetwork, from: &str, to: &str, algorithm: Algorithm) {
    let outcome = match algorithm {
        Algorithm::Bfs => graph_analysis::shortest_path_bfs(network, from, to),
        Algorithm::Dijkstra => graph_analysis::shortest_path_dijkstra(network, from, to),
    };
    match outcome {
        Ok(PathOutcome::Found { distance, path }) => println!(
            "{:?} path from '{}' to '{}': distance {}, path {}",
            algorithm,
            from,
            to,
            distance,
            path.join(" -> ")
        ),
        Ok(PathOutcome::NoPath) => {
            println!("{:?}: no path between '{}' and '{}'", algorithm, from, to)
        }
        Err(err) => warn!("{:?} path from '{}' to '{}': {}", algorithm, from, to, err),
    }
}

fn print_stats(network: &SocialNetwork, top: usize) {
    println!(
        "{} users, {} friendships",
        network.user_count(),
        network.friendship_count()
    );
    println!("Top {} most connected users:", top);
    for (user, friends) in graph_analysis::connectivity_analysis(network)
        .iter()
        .take(top)
    {
        println!("  User: {}, Number of Friends: {}", user, friends);
    }
    println!(
        "Largest friend cluster: {}",
        graph_analysis::largest_connected_component(network)
    );
}
