//! # odestep: Fixed-Step ODE Integration
//!
//! A small framework for integrating ordinary differential equations step
//! by step, built from three pluggable pieces:
//!
//! - [`Point`] — a fixed-dimension vector of `f64` with dimension-checked
//!   elementwise arithmetic. By convention component 0 holds the
//!   independent variable (time); the rest hold the dependent state.
//! - [`Method`] / [`Limit`] / [`Differential`] — the capability contracts a
//!   solver composes: a stepping algorithm, a termination predicate, and
//!   the right-hand side of the system. Plain closures satisfy all three.
//! - [`Solver`] — a stateful iterator that advances its owned point one
//!   step at a time until the limit fires, with optional lifecycle hooks
//!   ([`Hooks`]) for diagnostics.
//!
//! [`RungeKutta`] supplies the classical fourth-order method, and
//! [`RungeKuttaSolver`] wires it into a solver with logging hooks.
//!
//! ## Basic Usage
//!
//! ```rust
//! use odestep::{point, Point, RungeKutta, Solver};
//!
//! // Exponential growth: dy/dt = y, y(0) = 1, state = [t, y].
//! // The differential reports a zero rate for the time slot; the method
//! // advances it by the step size.
//! let differential = |y: &Point| point![0.0, y[1]];
//!
//! // Integrate until t >= 1.
//! let limit = |y: &Point| y[0] >= 1.0;
//!
//! let mut solver = Solver::new(RungeKutta, point![0.0, 1.0], limit, 0.001, differential)
//!     .unwrap();
//!
//! let trajectory = solver.evaluate();
//! let last = trajectory.last().unwrap();
//! assert!((last[1] - 1.0f64.exp()).abs() < 1e-9);
//! ```
//!
//! ## Stepping Manually
//!
//! A solver is an [`Iterator`]; the whole-run [`Solver::evaluate`] is just
//! a drained iteration bracketed by the pre/post-solve hooks. Stepping by
//! hand gives the same points:
//!
//! ```rust
//! use odestep::{point, Point, RungeKuttaSolver};
//!
//! let mut solver = RungeKuttaSolver::runge_kutta(
//!     point![0.0, 1.0],
//!     |y: &Point| y[0] >= 0.3,
//!     0.1,
//!     |y: &Point| point![0.0, -y[1]],
//! )
//! .unwrap();
//!
//! while let Some(state) = solver.next() {
//!     assert_eq!(state.dimension(), 2);
//! }
//! assert_eq!(solver.steps(), 3);
//! ```
//!
//! ## Termination
//!
//! The [`Limit`] predicate is the sole stopping mechanism: bounded runs
//! are limits on the time slot, divergence guards are limits on the state
//! (e.g. `|y: &Point| !y.is_finite()`). NaN and infinity are never trapped
//! by the framework itself; they propagate per IEEE-754 until a limit
//! notices them.
//!
//! ## Contract Failures
//!
//! Mixing points of different dimension — in arithmetic, in a
//! differential's output, or in a method — is a programmer error and
//! panics at the call site. Solver *construction* validates its inputs and
//! returns [`SolverError`] instead.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod point;
pub mod rk4;
pub mod solver;

pub use point::Point;
pub use rk4::{RungeKutta, RungeKuttaSolver};
pub use solver::{Differential, Hooks, Limit, Method, Solver, SolverError};
