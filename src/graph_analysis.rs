use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::adjacency_lists::SocialNetwork;
use crate::error::Result;

/// Result of a shortest-path query between two existing users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// `path` runs from start to end inclusive and has `distance + 1` entries for unit weights.
    Found { distance: usize, path: Vec<String> },
    /// Both users exist but sit in different connected components.
    NoPath,
}

impl PathOutcome {
    pub fn distance(&self) -> Option<usize> {
        match self {
            PathOutcome::Found { distance, .. } => Some(*distance),
            PathOutcome::NoPath => None,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            PathOutcome::Found { path, .. } => path,
            PathOutcome::NoPath => &[],
        }
    }
}

/// Users who are friends with both `a` and `b`.
pub fn mutual_friends(network: &SocialNetwork, a: &str, b: &str) -> Result<BTreeSet<String>> {
    network.require_users(&[a, b])?;
    let friends_a = network.friends(a)?;
    let friends_b = network.friends(b)?;
    Ok(friends_a.intersection(friends_b).cloned().collect())
}

/// Friend-of-friend candidates for `user`, scored by how many of their friends lead to each.
/// Sorted by score descending, then label ascending.
pub fn suggest_friends(network: &SocialNetwork, user: &str) -> Result<Vec<(String, usize)>> {
    let direct_friends = network.friends(user)?;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for friend in direct_friends {
        for candidate in network.neighbors(friend) {
            if candidate != user
                && !direct_friends.contains(candidate)
                && network.contains_user(candidate)
            {
                *counts.entry(candidate.as_str()).or_default() += 1; // one more friend leads here
            }
        }
    }

    let mut suggestions: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(candidate, count)| (candidate.to_string(), count))
        .collect();
    suggestions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    // highest score first, ties in label order
    Ok(suggestions)
}

/// Fewest-hops path by level-order search. Neighbors are expanded in label order, so the
/// first of several equally short paths in that order wins.
pub fn shortest_path_bfs(network: &SocialNetwork, start: &str, end: &str) -> Result<PathOutcome> {
    network.require_users(&[start, end])?;
    if start == end {
        return Ok(PathOutcome::Found {
            distance: 0,
            path: vec![start.to_string()],
        });
    }

    let mut distance: HashMap<&str, usize> = HashMap::new();
    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start); // seeds the traversal at distance 0

    while let Some(current) = queue.pop_front() {
        let next_distance = distance[current] + 1;
        for neighbor in network.neighbors(current) {
            let neighbor = neighbor.as_str();
            if distance.contains_key(neighbor) {
                continue; // already discovered at an equal or shorter distance
            }
            distance.insert(neighbor, next_distance);
            parent.insert(neighbor, current); // kept for path reconstruction
            trace!("bfs: discovered '{}' at distance {}", neighbor, next_distance);
            if neighbor == end {
                // distance is final the moment end is discovered
                return Ok(PathOutcome::Found {
                    distance: next_distance,
                    path: reconstruct_path(&parent, start, end),
                });
            }
            queue.push_back(neighbor);
        }
    }

    debug!("bfs: no path between '{}' and '{}'", start, end);
    Ok(PathOutcome::NoPath)
}

/// Cheapest path by priority-driven relaxation over [SocialNetwork::edge_weight].
///
/// The frontier is ordered by (tentative distance, label), so ties settle in label order.
/// Stale frontier entries are skipped when popped instead of being removed on update.
pub fn shortest_path_dijkstra(
    network: &SocialNetwork,
    start: &str,
    end: &str,
) -> Result<PathOutcome> {
    dijkstra_with_weights(network, start, end, |u, v| network.edge_weight(u, v))
}

fn dijkstra_with_weights<W>(
    network: &SocialNetwork,
    start: &str,
    end: &str,
    weight: W,
) -> Result<PathOutcome>
where
    W: Fn(&str, &str) -> usize,
{
    network.require_users(&[start, end])?;
    if start == end {
        return Ok(PathOutcome::Found {
            distance: 0,
            path: vec![start.to_string()],
        });
    }

    // missing entries are unreached (infinite distance)
    let mut distance: HashMap<&str, usize> = HashMap::new();
    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(usize, &str)>> = BinaryHeap::new();
    distance.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((cost, current))) = frontier.pop() {
        // stale and overflow skips below only fire once weights differ from 1
        if distance.get(current).is_some_and(|&best| cost > best) {
            continue; // superseded by a cheaper entry already settled
        }
        if current == end {
            return Ok(PathOutcome::Found {
                distance: cost,
                path: reconstruct_path(&parent, start, end),
            }); // first pop of end is final with non-negative weights
        }
        for neighbor in network.neighbors(current) {
            let neighbor = neighbor.as_str();
            let Some(candidate) = cost.checked_add(weight(current, neighbor)) else {
                continue; // unreachable at any finite cost through this edge
            };
            let improves = distance.get(neighbor).map_or(true, |&known| candidate < known);
            if improves {
                distance.insert(neighbor, candidate);
                parent.insert(neighbor, current);
                trace!("dijkstra: relaxed '{}' to {}", neighbor, candidate);
                frontier.push(Reverse((candidate, neighbor))); // older entry for neighbor goes stale
            }
        }
    }

    debug!("dijkstra: no path between '{}' and '{}'", start, end);
    Ok(PathOutcome::NoPath)
}

/// Walks parent links back from `end`. Stops at the first node without a parent, or once
/// more links were followed than there are recorded parents, so a broken chain cannot loop.
fn reconstruct_path(parent: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match parent.get(current) {
            Some(&previous) if path.len() <= parent.len() => {
                path.push(previous.to_string());
                current = previous;
            }
            _ => break,
        }
    }
    path.reverse();
    path
}

/// Every user with their number of friends, most connected first (ties by label).
pub fn connectivity_analysis(network: &SocialNetwork) -> Vec<(String, usize)> {
    let mut num_friends: Vec<(String, usize)> = network
        .users()
        .map(|user| (user.to_string(), network.neighbors(user).count()))
        .collect();
    num_friends.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    num_friends
}

fn bfs_component_size<'a>(
    start: &'a str,
    network: &'a SocialNetwork,
    visited: &mut HashSet<&'a str>,
) -> usize {
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(start);
    let mut size = 0;
    while let Some(user) = queue.pop_front() {
        if visited.insert(user) {
            size += 1; // first visit to this user
            for friend in network.neighbors(user) {
                if !visited.contains(friend.as_str()) {
                    queue.push_back(friend);
                }
            }
        }
    } // queue drains once the whole component has been visited
    size
}

/// Size of the largest group of users connected through friendships. 0 for an empty network.
pub fn largest_connected_component(network: &SocialNetwork) -> usize {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut max_size = 0;
    for user in network.users() {
        if !visited.contains(user) {
            let size = bfs_component_size(user, network, &mut visited);
            max_size = max_size.max(size);
        }
    }
    max_size
}
