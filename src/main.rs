use std::io::BufRead;

use log::{debug, error, info};
use pratt_calc::{evaluate, parse, Error};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const SAMPLE: &str = "(-1+2)*3";

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        println!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    debug!("{:?}", args);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => run_sample(),
        ["-e", input] => run_one(input),
        ["-i"] => repl(),
        _ => Err("usage: pratt-calc [-e <expression> | -i]".into()),
    }
}

fn run_sample() -> DynResult {
    info!("Evaluating sample `{}`", SAMPLE);
    let expr = parse(SAMPLE).map_err(|e| report(SAMPLE, e.into()))?;
    println!("{}", expr);
    let value = evaluate(&expr).map_err(|e| report(SAMPLE, e.into()))?;
    println!("{}", value);
    Ok(())
}

fn run_one(input: &str) -> DynResult {
    let value = pratt_calc::run(input).map_err(|e| report(input, e))?;
    println!("{}", value);
    Ok(())
}

fn repl() -> DynResult {
    info!("Running in REPL mode");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim_end();
        if input == "quit" {
            break;
        }
        if input.is_empty() {
            continue;
        }
        match pratt_calc::run(input) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                report(input, err);
            }
        }
    }

    Ok(())
}

fn report(input: &str, err: Error) -> Error {
    match err.get_source_start(input) {
        Some((row, col)) => error!("{} (line {}, column {})", err, row, col),
        None => error!("{}", err),
    }
    err
}
