use clap::{Parser, Subcommand, ValueEnum};
use u_genalg::ga::{Problem, SizePolicy};
use u_genalg::problems::{brute_force, City, Tsp};
use u_genalg::session::{run_ga, ParentStrategy, ProblemDescriptor, RunRequest};

#[derive(Parser)]
#[command(about = "Run the genetic algorithm on a phrase or a set of cities")]
struct Args {
    #[command(subcommand)]
    problem: ProblemArg,

    /// population size
    #[arg(long, default_value_t = 500, global = true)]
    pop_size: usize,

    /// maximum number of generations
    #[arg(long, default_value_t = 200, global = true)]
    generations: usize,

    /// mutation probability
    #[arg(long, default_value_t = 0.05, global = true)]
    mutation_rate: f64,

    /// parent selection strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::TopK, global = true)]
    strategy: StrategyArg,

    /// keep the population size exact instead of flooring children per pair
    #[arg(long, default_value_t = false, global = true)]
    exact_size: bool,

    /// RNG seed (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum ProblemArg {
    /// Evolve a string towards a target phrase
    String {
        #[arg(long, default_value = "To be, or not to be, that is the question.")]
        target: String,

        #[arg(
            long,
            default_value = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,;:!?"
        )]
        alphabet: String,
    },
    /// Find a short closed tour through cities given as `id:x:y`
    Tsp {
        #[arg(required = true, num_args = 1..)]
        cities: Vec<String>,

        /// also run the exhaustive search for comparison
        #[arg(long, default_value_t = false)]
        brute_force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    TopK,
    Weighted,
}

fn parse_city(raw: &str) -> Result<City, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [id, x, y] = parts.as_slice() else {
        return Err(format!("expected id:x:y, got {raw:?}"));
    };
    let x: f64 = x.parse().map_err(|e| format!("bad x in {raw:?}: {e}"))?;
    let y: f64 = y.parse().map_err(|e| format!("bad y in {raw:?}: {e}"))?;
    Ok(City::new(*id, x, y))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (descriptor, oracle) = match args.problem {
        ProblemArg::String { target, alphabet } => {
            (ProblemDescriptor::StringMatch { target, alphabet }, false)
        }
        ProblemArg::Tsp {
            cities,
            brute_force,
        } => {
            let parsed: Result<Vec<City>, String> = cities.iter().map(|c| parse_city(c)).collect();
            let cities = match parsed {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(2);
                }
            };
            (ProblemDescriptor::Tsp { cities }, brute_force)
        }
    };

    let request = RunRequest {
        population_size: args.pop_size,
        max_generations: args.generations,
        mutation_rate: args.mutation_rate,
        strategy: match args.strategy {
            StrategyArg::TopK => ParentStrategy::TopK,
            StrategyArg::Weighted => ParentStrategy::WeightedRandom,
        },
        size_policy: if args.exact_size {
            SizePolicy::Exact
        } else {
            SizePolicy::Floor
        },
        seed: args.seed,
        ..RunRequest::new(descriptor.clone())
    };

    match run_ga(&request, |summary| println!("{summary}")) {
        Ok(outcome) => {
            println!(
                "finished after {} generations (goal reached: {}), best {:?}: {}",
                outcome.generations,
                outcome.done,
                outcome.best_fitness,
                outcome.best_genome.unwrap_or_default()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    if let (true, ProblemDescriptor::Tsp { cities }) = (oracle, descriptor) {
        match Tsp::new(cities).and_then(|tsp| brute_force(&tsp).map(|best| (tsp, best))) {
            Ok((tsp, best)) => {
                println!(
                    "brute force optimum {:.4}: {}",
                    best.fitness,
                    tsp.render(&best.dna)
                );
            }
            Err(e) => eprintln!("brute force skipped: {e}"),
        }
    }
}
