//! Traveling Salesman Problem over Euclidean cities.
//!
//! Tours are permutations of city indices with the first city pinned at
//! position 0. Rotations of a closed tour are the same solution, so
//! anchoring removes them from the search space.

use crate::error::{GaError, Result};
use crate::ga::operators::{adjacent_swap_mutation, order_crossover};
use crate::ga::{Problem, ScoredIndividual};
use crate::random::shuffle;
use rand::Rng;
use std::collections::HashSet;

/// Largest instance [`brute_force`] will enumerate.
pub const MAX_BRUTE_FORCE_CITIES: usize = 12;

/// A named point in the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// TSP with a precomputed distance matrix.
///
/// Fitness is the negated length of the closed tour, so shorter tours
/// score higher and every fitness is `<= 0`.
///
/// # Examples
///
/// ```
/// use u_genalg::ga::Problem;
/// use u_genalg::problems::{City, Tsp};
///
/// let tsp = Tsp::new(vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 3.0, 0.0),
///     City::new("c", 3.0, 4.0),
/// ])
/// .unwrap();
/// assert_eq!(tsp.fitness(&vec![0, 1, 2]), -12.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tsp {
    cities: Vec<City>,
    /// Row-major `n × n` distances.
    distances: Vec<f64>,
}

impl Tsp {
    /// Builds the problem and its distance matrix.
    ///
    /// # Errors
    /// [`GaError::InvalidConfiguration`] if `cities` is empty, contains a
    /// duplicate id, or has a non-finite coordinate.
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(GaError::InvalidConfiguration(
                "city set must not be empty".into(),
            ));
        }
        let mut ids = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !ids.insert(city.id.as_str()) {
                return Err(GaError::InvalidConfiguration(format!(
                    "duplicate city id {:?}",
                    city.id
                )));
            }
            if !city.x.is_finite() || !city.y.is_finite() {
                return Err(GaError::InvalidConfiguration(format!(
                    "city {:?} has a non-finite coordinate",
                    city.id
                )));
            }
        }

        let n = cities.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance(&cities[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self { cities, distances })
    }

    /// Cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: construction rejects an empty city set.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Distance between cities `a` and `b` (indices).
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distances[a * self.cities.len() + b]
    }

    /// Length of the closed tour, including the edge back to the start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        open + self.distance(tour[tour.len() - 1], tour[0])
    }
}

impl Problem for Tsp {
    type Genome = Vec<usize>;

    fn random_dna<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..self.cities.len()).collect();
        shuffle(&mut tour[1..], rng);
        tour
    }

    fn fitness(&self, tour: &Vec<usize>) -> f64 {
        -self.tour_length(tour)
    }

    fn cross<R: Rng>(&self, parent1: &Vec<usize>, parent2: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        order_crossover(parent1, parent2, 1, rng)
    }

    /// One adjacent swap with probability `rate`; position 0 never moves.
    fn mutate<R: Rng>(&self, tour: &mut Vec<usize>, rate: f64, rng: &mut R) {
        if rng.random::<f64>() < rate {
            adjacent_swap_mutation(tour, 1, rng);
        }
    }

    fn render(&self, tour: &Vec<usize>) -> String {
        tour.iter()
            .map(|&i| self.cities[i].id.as_str())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Exhaustively searches every anchored tour and returns the shortest.
///
/// Enumerates the `(n - 1)!` orderings of cities `1..n` behind the anchor
/// with Heap's algorithm. Ties keep the first tour found.
///
/// # Errors
/// [`GaError::InvalidConfiguration`] if the instance has more than
/// [`MAX_BRUTE_FORCE_CITIES`] cities.
pub fn brute_force(tsp: &Tsp) -> Result<ScoredIndividual<Vec<usize>>> {
    let n = tsp.len();
    if n > MAX_BRUTE_FORCE_CITIES {
        return Err(GaError::InvalidConfiguration(format!(
            "brute force is limited to {MAX_BRUTE_FORCE_CITIES} cities, got {n}"
        )));
    }

    let mut tour: Vec<usize> = (0..n).collect();
    let mut best = ScoredIndividual::new(tour.clone(), tsp.fitness(&tour));
    if n < 3 {
        return Ok(best);
    }

    // Iterative Heap's algorithm over tour[1..].
    let k = n - 1;
    let mut c = vec![0usize; k];
    let mut i = 1;
    let mut evaluated = 1usize;
    while i < k {
        if c[i] < i {
            let j = if i % 2 == 0 { 0 } else { c[i] };
            tour.swap(1 + j, 1 + i);
            let f = tsp.fitness(&tour);
            evaluated += 1;
            if f > best.fitness {
                best = ScoredIndividual::new(tour.clone(), f);
            }
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }

    log::debug!("brute force evaluated {evaluated} tours over {n} cities");
    Ok(best)
}
