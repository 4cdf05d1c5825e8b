//! Thunderbolt: a heuristic-guided walk with backtracking.
//!
//! The walker heads for the target one arc at a time, picking among the
//! successors it has not entered yet, and steps back when it runs out of
//! them. Each node is entered at most once per search, so the walk ends on
//! any finite graph, and it only gives up once every node reachable from the
//! source has been tried. The path it returns is plausible, not shortest.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_core::NodeId;

use crate::astar::log_found;
use crate::error::{PathError, check_endpoints};
use crate::path::{ParentMap, Path, reconstruct_path};
use crate::sampler::WeightedSampler;
use crate::search::{Pathfinder, SearchResult};
use crate::traits::{GraphView, HeuristicFunction};

/// Default ceiling multiplier of the probabilistic policy.
pub const DEFAULT_SLACK_FACTOR: f64 = 1.15;

/// How the walker chooses the next node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkPolicy {
    /// Always take the successor closest to the target by the heuristic,
    /// lowest id first on ties.
    Greedy,
    /// Draw a successor at random, favouring those closer to the target.
    #[default]
    Probabilistic,
}

/// Walker settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThunderboltConfig {
    pub policy: WalkPolicy,
    /// The probabilistic policy weighs a successor `c` by
    /// `slack_factor * max_h - h(c)`, where `max_h` is the largest estimate
    /// among the candidates. Must be finite and at least 1.
    pub slack_factor: f64,
    /// Seed for reproducible walks. Without one every search draws from the
    /// thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for ThunderboltConfig {
    fn default() -> Self {
        Self {
            policy: WalkPolicy::default(),
            slack_factor: DEFAULT_SLACK_FACTOR,
            seed: None,
        }
    }
}

/// The randomized walker.
pub struct Thunderbolt<'a, G, H> {
    graph: &'a G,
    heuristic: &'a H,
    config: ThunderboltConfig,
}

impl<'a, G, H> Thunderbolt<'a, G, H>
where
    G: GraphView,
    H: HeuristicFunction,
{
    /// Walker with the default configuration.
    pub fn new(graph: &'a G, heuristic: &'a H) -> Self {
        Self::with_config(graph, heuristic, ThunderboltConfig::default())
    }

    pub fn with_config(graph: &'a G, heuristic: &'a H, config: ThunderboltConfig) -> Self {
        Self {
            graph,
            heuristic,
            config,
        }
    }

    /// Shorthand for the greedy policy.
    pub fn greedy(graph: &'a G, heuristic: &'a H) -> Self {
        Self::with_config(
            graph,
            heuristic,
            ThunderboltConfig {
                policy: WalkPolicy::Greedy,
                ..ThunderboltConfig::default()
            },
        )
    }

    pub fn config(&self) -> &ThunderboltConfig {
        &self.config
    }

    /// Walk from `source` to `target` drawing from `rng`.
    pub fn search_with_rng<R: Rng>(
        &self,
        source: NodeId,
        target: NodeId,
        rng: &mut R,
        stop: &dyn Fn() -> bool,
    ) -> SearchResult {
        check_endpoints(self.graph, source, target)?;
        let slack = self.config.slack_factor;
        if !slack.is_finite() || slack < 1.0 {
            return Err(PathError::InvalidSlackFactor(slack));
        }
        if source == target {
            return Ok(Some(Path::trivial(source)));
        }

        let mut visited: HashSet<NodeId> = HashSet::from([source]);
        let mut parents: ParentMap = HashMap::from([(source, None)]);
        let mut stack = vec![source];
        let mut nbuf = Vec::new();

        loop {
            if stop() {
                return Err(PathError::Interrupted);
            }
            let Some(&current) = stack.last() else {
                log::debug!(
                    "{}: {} unreachable from {} after visiting {} nodes",
                    self.name(),
                    target,
                    source,
                    visited.len()
                );
                return Ok(None);
            };

            nbuf.clear();
            self.graph.successors(current, &mut nbuf);
            nbuf.retain(|n| !visited.contains(n));

            let next = match self.config.policy {
                WalkPolicy::Greedy => self.closest(&nbuf, target),
                WalkPolicy::Probabilistic => self.draw(&nbuf, target, rng),
            };

            match next {
                Some(next) => {
                    visited.insert(next);
                    parents.insert(next, Some(current));
                    if next == target {
                        let path = reconstruct_path(target, &parents, None);
                        log_found(self.name(), &path, visited.len());
                        return Ok(Some(path));
                    }
                    stack.push(next);
                }
                // Dead end: step back. The node stays visited.
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn closest(&self, candidates: &[NodeId], target: NodeId) -> Option<NodeId> {
        candidates
            .iter()
            .map(|&c| (self.heuristic.estimate(c, target), c))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, c)| c)
    }

    fn draw<R: Rng>(&self, candidates: &[NodeId], target: NodeId, rng: &mut R) -> Option<NodeId> {
        if candidates.is_empty() {
            return None;
        }
        let estimates: Vec<f64> = candidates
            .iter()
            .map(|&c| self.heuristic.estimate(c, target))
            .collect();
        let ceiling = estimates.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            * self.config.slack_factor;

        let mut sampler = WeightedSampler::new();
        for (&c, &h) in candidates.iter().zip(&estimates) {
            sampler.add(c, ceiling - h);
        }
        sampler.sample(rng)
    }
}

impl<G, H> Pathfinder for Thunderbolt<'_, G, H>
where
    G: GraphView,
    H: HeuristicFunction,
{
    fn name(&self) -> &'static str {
        match self.config.policy {
            WalkPolicy::Greedy => "Thunderbolt (greedy)",
            WalkPolicy::Probabilistic => "Thunderbolt",
        }
    }

    fn search_with(&self, source: NodeId, target: NodeId, stop: &dyn Fn() -> bool) -> SearchResult {
        match self.config.seed {
            Some(seed) => self.search_with_rng(source, target, &mut StdRng::seed_from_u64(seed), stop),
            None => self.search_with_rng(source, target, &mut rand::rng(), stop),
        }
    }
}
