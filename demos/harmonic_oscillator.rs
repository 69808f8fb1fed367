//! Second-order system as a first-order state — harmonic oscillator.
//!
//! Integrates y'' + ω²y = 0 for one period as the state [t, y, y'] and
//! compares with the exact solution y = cos(ωt), y' = -ω sin(ωt).
//!
//! Run with:
//!   cargo run --example harmonic_oscillator

use odestep::{point, Point, RungeKutta, Solver};

fn main() {
    let omega: f64 = 2.0;
    let period = 2.0 * std::f64::consts::PI / omega;
    let h = 0.001;

    let mut solver = Solver::new(
        RungeKutta,
        point![0.0, 1.0, 0.0], // y(0) = 1, y'(0) = 0
        move |y: &Point| y[0] >= period,
        h,
        move |y: &Point| point![0.0, y[2], -omega * omega * y[1]],
    )
    .expect("valid solver inputs");

    let trajectory = solver.evaluate();
    let last = trajectory.last().expect("at least one step");

    let t = last[0];
    let y_exact = (omega * t).cos();
    let v_exact = -omega * (omega * t).sin();

    println!("Harmonic Oscillator (ω = {omega})");
    println!("  Period:      {period:.6} s");
    println!("  Final time:  {t:.6} s");
    println!();
    println!("  y(T)  = {:.15}   (exact: {:.15})", last[1], y_exact);
    println!("  y'(T) = {:.15}   (exact: {:.15})", last[2], v_exact);
    println!();
    println!("  Position error: {:.2e}", (last[1] - y_exact).abs());
    println!("  Velocity error: {:.2e}", (last[2] - v_exact).abs());
    println!();
    println!("  Steps taken: {}", solver.steps());
}
