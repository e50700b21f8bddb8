use std::process;

use clap::{ArgAction, CommandFactory, Parser};
use cpu_time::ProcessTime;
use log::{info, LevelFilter};

use res_lib::parse::parse_clauses;
use res_lib::resolution::Saturation;

const AFTER_HELP: &str = "\
Output:
  [ ]         The clause set is unsatisfiable (contradiction found)
  [x]         The clause set is satisfiable (no contradiction found)

Examples:
  res a,-a
  res \"a,b\" \"-a,c\" \"-b,c\" \"-c\"
  res a,b,-c -a,b,c -b,c -c
  res -- -a,b,-c -a,b,c -b,c -c";

/// A resolution theorem prover for propositional logic.
#[derive(Parser, Debug)]
#[command(name = "res", after_help = AFTER_HELP)]
struct Cli {
    /// A clause in the format A,B,-C (comma-separated literals).
    /// Each literal is a single letter (A-Z) optionally prefixed with '-'
    #[arg(value_name = "CLAUSE", num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    clauses: Vec<String>,

    /// Log progress to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .format_timestamp(None)
        .format_module_path(false)
        .filter_level(level(cli.verbose))
        .parse_default_env()
        .init();

    if cli.clauses.is_empty() {
        eprintln!("{}", Cli::command().render_help());
        process::exit(0);
    }

    let clauses = match parse_clauses(&cli.clauses) {
        Ok(clauses) => clauses,
        Err((arg, err)) => {
            eprintln!("Error parsing clause {arg:?}: {err}");
            process::exit(1);
        }
    };
    info!("read {} clauses", clauses.len());

    let start = ProcessTime::try_now().ok();
    let mut saturation = Saturation::new(clauses);
    let verdict = saturation.run();

    info!("{:?} after {}", verdict, saturation.stats());
    if let Some(elapsed) = start.and_then(|s| s.try_elapsed().ok()) {
        info!("cpu time: {elapsed:?}");
    }

    println!("{verdict}");
}
