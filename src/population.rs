//! Object population generator.
//!
//! Produces the session's tracked objects once at startup.  The random source
//! is injected so a seeded generator reproduces the same population exactly;
//! the Bevy side wraps the result in the [`Population`] resource, which is
//! never resized or re-seeded afterwards.

use crate::config::ViewConfig;
use crate::constants::ANOMALY_SCORE_MAX;
use crate::object::{Category, Layer, ObjectId, SimulatedObject};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Bounds for the randomised object parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    pub velocity_min: f32,
    pub velocity_max: f32,
}

impl From<&ViewConfig> for GeneratorParams {
    fn from(config: &ViewConfig) -> Self {
        Self {
            velocity_min: config.velocity_min,
            velocity_max: config.velocity_max,
        }
    }
}

/// Generate `count` objects with uniformly drawn layer, category, inclination,
/// velocity and anomaly score.  Ids follow the creation index.
pub fn generate_population<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
    params: &GeneratorParams,
) -> Vec<SimulatedObject> {
    (0..count)
        .map(|index| SimulatedObject {
            id: ObjectId(index as u32),
            layer: Layer::ALL[rng.gen_range(0..Layer::ALL.len())],
            category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            inclination: rng.gen_range(0.0..TAU),
            velocity: rng.gen_range(params.velocity_min..params.velocity_max),
            anomaly_score: rng.gen_range(0.0..ANOMALY_SCORE_MAX),
        })
        .collect()
}

/// A reproducible generator when `seed` is set, an entropy-seeded one otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// The session's tracked objects.  Filtering never removes entries.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct Population(pub Vec<SimulatedObject>);

impl Population {
    #[inline]
    pub fn objects(&self) -> &[SimulatedObject] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Startup system: seed [`Population`] from [`ViewConfig`].
///
/// Runs once; the population is left untouched for the rest of the session.
pub fn seed_population_system(config: Res<ViewConfig>, mut population: ResMut<Population>) {
    let mut rng = seeded_rng(config.seed);
    let params = GeneratorParams::from(&*config);
    population.0 = generate_population(config.object_count, &mut rng, &params);
    match config.seed {
        Some(seed) => info!(
            "Seeded {} tracked objects (seed {})",
            population.len(),
            seed
        ),
        None => info!("Seeded {} tracked objects", population.len()),
    }
}
