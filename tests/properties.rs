//! Property tests for the genetic operators and the alias table.

use proptest::prelude::*;
use u_genalg::alias::AliasTable;
use u_genalg::ga::operators::is_permutation;
use u_genalg::ga::Problem;
use u_genalg::problems::{City, StringMatch, Tsp};
use u_genalg::random::create_rng;
use u_genalg::GaError;

fn cities_strategy() -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..20).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(format!("c{i}"), x, y))
            .collect()
    })
}

proptest! {
    #[test]
    fn tsp_operators_keep_anchored_permutation(
        cities in cities_strategy(),
        seed in any::<u64>(),
        rate in 0.0f64..=1.0,
    ) {
        let n = cities.len();
        let tsp = Tsp::new(cities).unwrap();
        let mut rng = create_rng(seed);
        for _ in 0..20 {
            let p1 = tsp.random_dna(&mut rng);
            let p2 = tsp.random_dna(&mut rng);
            prop_assert!(is_permutation(&p1, n));
            prop_assert_eq!(p1[0], 0);

            let mut child = tsp.cross(&p1, &p2, &mut rng);
            prop_assert!(is_permutation(&child, n));
            prop_assert_eq!(child[0], 0);

            tsp.mutate(&mut child, rate, &mut rng);
            prop_assert!(is_permutation(&child, n));
            prop_assert_eq!(child[0], 0);
        }
    }

    #[test]
    fn tsp_fitness_is_non_positive(cities in cities_strategy(), seed in any::<u64>()) {
        let tsp = Tsp::new(cities).unwrap();
        let mut rng = create_rng(seed);
        let tour = tsp.random_dna(&mut rng);
        prop_assert!(tsp.fitness(&tour) <= 0.0);
    }

    #[test]
    fn string_fitness_in_unit_range(target in "[a-z ]{1,30}", seed in any::<u64>()) {
        let problem = StringMatch::new(&target, "abcdefghijklmnopqrstuvwxyz ").unwrap();
        let mut rng = create_rng(seed);
        let dna = problem.random_dna(&mut rng);
        let f = problem.fitness(&dna);
        prop_assert!((0.0..=1.0).contains(&f));

        let exact: Vec<char> = target.chars().collect();
        prop_assert_eq!(problem.fitness(&exact), 1.0);
    }

    #[test]
    fn string_children_keep_length(target in "[a-z]{1,30}", seed in any::<u64>(), rate in 0.0f64..=1.0) {
        let problem = StringMatch::new(&target, "abcdefghijklmnopqrstuvwxyz").unwrap();
        let mut rng = create_rng(seed);
        let p1 = problem.random_dna(&mut rng);
        let p2 = problem.random_dna(&mut rng);
        let mut child = problem.cross(&p1, &p2, &mut rng);
        problem.mutate(&mut child, rate, &mut rng);
        prop_assert_eq!(child.len(), target.chars().count());
    }

    #[test]
    fn alias_draws_only_positive_weights(
        weights in prop::collection::vec(0.0f64..10.0, 1..50),
        seed in any::<u64>(),
    ) {
        let total: f64 = weights.iter().sum();
        match AliasTable::new(&weights) {
            Ok(table) => {
                prop_assert!(total > 0.0);
                let mut rng = create_rng(seed);
                for _ in 0..200 {
                    let i = table.draw(&mut rng);
                    prop_assert!(i < weights.len());
                    prop_assert!(weights[i] > 0.0);
                }
            }
            Err(GaError::DegenerateSampling(_)) => prop_assert_eq!(total, 0.0),
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }
}
