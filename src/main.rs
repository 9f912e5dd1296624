use chrono::Local;
use clap::{Parser, ValueEnum};
use groebner::{
    buchberger::Buchberger,
    families::{cyclic, katsura, symmetric},
    groebner::{auto_reduce, is_groebner_basis},
    poly::{
        order::{Comparator, DegLexOrder, DegRevLexOrder, LexOrder},
        set::GeneratorSet,
    },
    GF,
};
use log::LevelFilter;
use rayon::prelude::*;
use simple_logger::SimpleLogger;
use std::{error::Error, sync::Arc, time::Instant};

type DynOrder = Arc<dyn Comparator>;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Family {
    Symmetric,
    Cyclic,
    Katsura,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
enum OrderKind {
    Lex,
    Deglex,
    Degrevlex,
}

impl OrderKind {
    fn comparator(self) -> DynOrder {
        match self {
            OrderKind::Lex => Arc::new(LexOrder),
            OrderKind::Deglex => Arc::new(DegLexOrder::default()),
            OrderKind::Degrevlex => Arc::new(DegRevLexOrder::default()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Benchmark system to solve
    #[arg(short, long, value_enum)]
    family: Family,

    /// Size of the system
    #[arg(short, long)]
    n: usize,

    /// Monomial orders to compute the basis under
    #[arg(short, long, value_enum, num_args = 1.., default_value = "degrevlex")]
    orders: Vec<OrderKind>,

    /// Compute all orders concurrently, each on its own copy of the input
    #[arg(long)]
    race: bool,

    /// Check the result with the S-polynomial criterion
    #[arg(long)]
    verify: bool,

    /// Print the generators of the reduced basis
    #[arg(short, long)]
    print: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

struct Outcome {
    order: OrderKind,
    basis: GeneratorSet<GF, DynOrder>,
    seconds: f64,
    verified: Option<bool>,
}

fn build(family: Family, n: usize, order: DynOrder) -> GeneratorSet<GF, DynOrder> {
    match family {
        Family::Symmetric => symmetric(n, order),
        Family::Cyclic => cyclic(n, order),
        Family::Katsura => katsura(n, order),
    }
}

fn compute(args: &Args, order: OrderKind) -> Outcome {
    let ideal = build(args.family, args.n, order.comparator());
    println!(
        "{} Computation start, {:?} order, {} generators",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        order,
        ideal.len()
    );
    let start_time = Instant::now();

    let (basis, stats) = Buchberger::new(&auto_reduce(&ideal)).run_with_stats();
    let basis = auto_reduce(&basis);

    let elapsed_time = start_time.elapsed();
    let seconds = elapsed_time.as_secs() as f64 + elapsed_time.subsec_nanos() as f64 * 1e-9;
    println!(
        "{} Computation end, {:?} order, total time {:.3} seconds, {:?}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        order,
        seconds,
        stats
    );

    let verified = args.verify.then(|| is_groebner_basis(basis.as_slice()));
    Outcome {
        order,
        basis,
        seconds,
        verified,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    if args.n == 0 {
        return Err("the system size must be positive".into());
    }

    let outcomes: Vec<Outcome> = if args.race {
        args.orders
            .par_iter()
            .map(|&order| compute(&args, order))
            .collect()
    } else {
        args.orders
            .iter()
            .map(|&order| compute(&args, order))
            .collect()
    };

    for outcome in outcomes.iter() {
        println!(
            "{:?}-{} under {:?}: {} generators in {:.3} seconds",
            args.family,
            args.n,
            outcome.order,
            outcome.basis.len(),
            outcome.seconds
        );
        if let Some(verified) = outcome.verified {
            if !verified {
                return Err(format!("{:?} result is not a Gröbner basis", outcome.order).into());
            }
            println!("Verified");
        }
        if args.print {
            for poly in outcome.basis.iter() {
                println!(" > {}", poly);
            }
        }
    }

    Ok(())
}
