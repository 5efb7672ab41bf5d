use std::process::exit;

use clap::{Parser, ValueEnum};
use log::info;
use relp_num::{RationalBig, RB};

use utmatrix::data::linear_algebra::error::Result;
use utmatrix::data::linear_algebra::matrix::TriangularMatrix;
use utmatrix::data::linear_algebra::ops::Ring;

/// Arithmetic on upper triangular matrices.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Number of rows and columns of the matrices
    #[arg(long, default_value_t = 5)]
    order: usize,
    /// Operation to apply to the two matrices
    #[arg(long, value_enum, default_value_t = Operation::Add)]
    operation: Operation,
    /// Type of the matrix elements
    #[arg(long, value_enum, default_value_t = Numbers::Integer)]
    numbers: Numbers,
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Clone, Copy, ValueEnum)]
enum Numbers {
    Integer,
    Float,
    Rational,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let result = match opts.numbers {
        Numbers::Integer => run::<i64>(opts.order, opts.operation, i64::from),
        Numbers::Float => run::<f64>(opts.order, opts.operation, f64::from),
        Numbers::Rational => run::<RationalBig>(opts.order, opts.operation, |value| RB!(value)),
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        exit(1);
    }
}

fn run<F: Ring>(order: usize, operation: Operation, convert: impl Fn(i32) -> F) -> Result<()> {
    let mut a = TriangularMatrix::<F>::zeros(order)?;
    let mut b = TriangularMatrix::<F>::zeros(order)?;
    info!("Filling two triangular matrices of order {}", order);
    for i in 0..order {
        for j in i..order {
            let value = (i * 10 + j) as i32;
            a.set(i, j, convert(value))?;
            b.set(i, j, convert(value * 100))?;
        }
    }

    let (c, symbol) = match operation {
        Operation::Add => ((&a + &b)?, "+"),
        Operation::Subtract => ((&a - &b)?, "-"),
        Operation::Multiply => ((&a * &b)?, "*"),
    };

    println!("Matrix a =\n{}", a);
    println!("Matrix b =\n{}", b);
    println!("Matrix c = a {} b\n{}", symbol, c);

    Ok(())
}
