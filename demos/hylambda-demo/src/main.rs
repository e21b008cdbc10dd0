use std::path::PathBuf;

use clap::Parser as ClapParser;
use hylambda::prelude::*;
use log::info;

#[derive(ClapParser)]
pub struct Arguments {
    /// Argument passed to the fixed-point factorial
    #[arg(long, default_value_t = 3)]
    factorial: usize,

    /// Path to an evaluation config (TOML). Falls back to HYLAMBDA_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,
}

struct Report {
    sum: usize,
    product: usize,
    pair: (usize, usize),
    head: usize,
    factorial: usize,
}

fn evaluate(factorial_of: usize) -> Report {
    let one = succ(&zero());
    let two = succ(&one);
    let three = succ(&two);

    let p = pair(&one, &two);
    let list = cons(&one, &cons(&two, &cons(&three, &nil())));

    Report {
        sum: decode(&add(&one, &two)),
        product: decode(&mult(&two, &three)),
        pair: (decode(&first(&p)), decode(&second(&p))),
        head: decode(&head(&list)),
        factorial: decode(&factorial().apply(from_usize(factorial_of))),
    }
}

fn main() {
    env_logger::init();
    let args = Arguments::parse();

    let config = match &args.config {
        Some(path) => EvalConfig::load_from_toml(path),
        None => EvalConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load configuration: {}", error);
            std::process::exit(1);
        }
    };
    info!("Using evaluation config {:?}", config);

    let n = args.factorial;
    match run_with_stack(&config, move || evaluate(n)) {
        Ok(report) => {
            println!("1 + 2 = {}", report.sum);
            println!("2 * 3 = {}", report.product);
            println!("first(pair(1, 2)) = {}", report.pair.0);
            println!("second(pair(1, 2)) = {}", report.pair.1);
            println!("head([1, 2, 3]) = {}", report.head);
            println!("factorial({}) = {}", n, report.factorial);
        }
        Err(error) => {
            eprintln!("Evaluation failed: {}", error);
            std::process::exit(1);
        }
    }
}
