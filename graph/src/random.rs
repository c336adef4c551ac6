//! Random graph generation.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::Error;
use crate::matrix::Graph;

impl Graph {
    /// Generates a random directed graph.
    ///
    /// Roughly `density` of the off-diagonal entries receive a weight
    /// drawn uniformly from `weights`; the rest stay unreachable. The
    /// diagonal stays 0.
    pub fn random(
        vertices: usize,
        density: f64,
        weights: RangeInclusive<i64>,
    ) -> Result<Self, Error> {
        Self::random_with(&mut rand::thread_rng(), vertices, density, weights)
    }

    /// Like [`Graph::random`], with a caller-supplied source of
    /// randomness for reproducible graphs.
    pub fn random_with<R: Rng>(
        rng: &mut R,
        vertices: usize,
        density: f64,
        weights: RangeInclusive<i64>,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        let (min, max) = (*weights.start(), *weights.end());
        if min > max {
            return Err(Error::InvalidWeightRange { min, max });
        }

        let mut graph = Graph::new(vertices)?;
        for from in 0..vertices {
            for to in 0..vertices {
                if from == to {
                    continue;
                }
                if rng.gen_range(0.0..1.0) < density {
                    graph.set_edge(from, to, rng.gen_range(min..=max))?;
                }
            }
        }
        Ok(graph)
    }
}
