//! Basic fixed-step usage — exponential growth.
//!
//! Integrates dy/dt = y from y(0) = 1 until t = 1 and compares the
//! trajectory endpoint with the closed form e^t.
//!
//! Run with:
//!   cargo run --example exponential_growth

use odestep::{point, Point, RungeKuttaSolver};

fn main() {
    init_logging();

    let h = 0.05;
    let mut solver = RungeKuttaSolver::runge_kutta(
        point![0.0, 1.0],          // [t, y]
        |y: &Point| y[0] >= 1.0,   // stop once t reaches 1
        h,
        |y: &Point| point![0.0, y[1]],
    )
    .expect("valid solver inputs");

    let trajectory = solver.evaluate();

    println!("Exponential growth, h = {h}");
    println!("{:>10} {:>20} {:>20} {:>12}", "t", "y", "exact", "error");
    for state in &trajectory {
        let exact = state[0].exp();
        println!(
            "{:>10.4} {:>20.15} {:>20.15} {:>12.3e}",
            state[0],
            state[1],
            exact,
            (state[1] - exact).abs()
        );
    }
    println!();
    println!("Steps taken: {}", solver.steps());
}

/// Route the solver's per-step debug diagnostics to stdout.
fn init_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()
        .expect("logger not yet installed");
}
