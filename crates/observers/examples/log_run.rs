//! Fits a two-parameter criterion with every evaluation logged.
//!
//! Run with `RUST_LOG=debug cargo run --example log_run`.

use log::Level;

use mixfit_observers::LogObserver;
use mixfit_solvers::optimization::nelder_mead::{
    Bounds, Config, Error, FnObjective, minimize,
};

/// A stand-in for a profiled deviance in two variance parameters.
fn criterion(theta: &[f64]) -> f64 {
    let [a, b] = [theta[0], theta[1]];
    (a - 0.8).powi(2) + 2.0 * (b - 0.3).powi(2) + 0.5 * a * b
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let objective = FnObjective(criterion);
    let bounds = Bounds::unbounded().with_lower(vec![0.0, 0.0]);
    let mut observer = LogObserver::new(Level::Info);

    let solution = minimize(
        &objective,
        &objective,
        &[1.0, 1.0],
        &bounds,
        &Config::default(),
        &mut observer,
    )?;

    println!(
        "{:?} after {} iterations ({} evaluations): theta = {:?}, criterion = {}",
        solution.status, solution.iters, solution.evals, solution.x, solution.objective
    );
    Ok(())
}
