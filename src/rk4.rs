//! Classical fourth-order Runge-Kutta stepping.
//!
//! Reference: Hairer, Nørsett & Wanner, "Solving Ordinary Differential
//! Equations I: Nonstiff Problems", Springer, 1993.

use crate::point::Point;
use crate::solver::{Differential, Hooks, Limit, Method, Solver, SolverError};

/// Classical explicit fourth-order Runge-Kutta method.
///
/// Advances a state `y` by one step of size `h`:
///
/// ```text
/// k1 = f(y)
/// k2 = f(y + k1 * h/2)
/// k3 = f(y + k2 * h/2)
/// k4 = f(y + k3 * h)
/// y' = y + (k1 + 2*k2 + 2*k3 + k4) * (h/6)
/// ```
///
/// The differential is evaluated exactly four times per step, with no
/// caching across steps. After the combination, component 0 of the result
/// is advanced by `h`: slot 0 carries the independent variable (time) and
/// accumulates alongside the dependent state, so differentials report a
/// zero rate for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta;

impl Method for RungeKutta {
    fn advance(&self, current: &Point, step_size: f64, differential: &dyn Differential) -> Point {
        let half = step_size / 2.0;

        let k1 = differential.eval(current);
        let k2 = differential.eval(&(current + &k1.times(half)));
        let k3 = differential.eval(&(current + &k2.times(half)));
        let k4 = differential.eval(&(current + &k3.times(step_size)));

        let weighted = &(&(&k1 + &k2.times(2.0)) + &k3.times(2.0)) + &k4;
        let mut next = current + &weighted.times(step_size / 6.0);
        next[0] += step_size;
        next
    }
}

/// A [`Solver`] with the method permanently bound to [`RungeKutta`].
pub type RungeKuttaSolver<F, L> = Solver<RungeKutta, F, L>;

impl<F, L> Solver<RungeKutta, F, L>
where
    F: Differential,
    L: Limit,
{
    /// Create a Runge-Kutta solver with the default diagnostic hooks: each
    /// step is reported through `log::debug!` before it is taken, and the
    /// total step count through `log::info!` once the run is drained. With
    /// no logger installed both are no-ops.
    ///
    /// Use [`Solver::with_hooks`] to replace the diagnostics, or
    /// [`Solver::new`] for a silent solver.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use odestep::{point, Point, RungeKuttaSolver};
    ///
    /// // dy/dt = 0: the state is carried unchanged while time accumulates.
    /// let mut solver = RungeKuttaSolver::runge_kutta(
    ///     point![0.0, 7.0],
    ///     |y: &Point| y[0] >= 1.0,
    ///     0.25,
    ///     |y: &Point| odestep::Point::zeros(y.dimension()),
    /// )
    /// .unwrap();
    ///
    /// let trajectory = solver.evaluate();
    /// assert_eq!(trajectory.len(), 4);
    /// assert_eq!(trajectory.last().unwrap(), &point![1.0, 7.0]);
    /// ```
    pub fn runge_kutta(
        initial: Point,
        limit: L,
        step_size: f64,
        differential: F,
    ) -> Result<Self, SolverError> {
        Solver::with_hooks(
            RungeKutta,
            initial,
            limit,
            step_size,
            differential,
            diagnostic_hooks(),
        )
    }
}

/// Hooks reporting per-step state and the final step count through the
/// `log` facade.
fn diagnostic_hooks() -> Hooks {
    Hooks {
        on_pre_step: Some(Box::new(|step: u64, point: &Point| {
            log::debug!("step {}: point = {}", step, point);
        })),
        on_post_solve: Some(Box::new(|steps: u64| {
            log::info!("integration ended after {} steps", steps);
        })),
        ..Hooks::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn zero_derivative_only_advances_time() {
        let zero = |y: &Point| Point::zeros(y.dimension());

        for h in [1e-3, 0.1, 2.5] {
            let next = RungeKutta.advance(&point![0.0, 3.0, -4.0], h, &zero);
            assert_eq!(next, point![h, 3.0, -4.0]);
        }
    }

    #[test]
    fn exponential_growth_single_step_matches_closed_form() {
        // dy/dt = y from y(0) = 1; one RK4 step of h = 0.1 must match
        // e^0.1 to within the local truncation error O(h^5).
        let growth = |y: &Point| point![0.0, y[1]];
        let h = 0.1;

        let next = RungeKutta.advance(&point![0.0, 1.0], h, &growth);

        assert_eq!(next[0], h);
        let exact = h.exp();
        assert!(
            (next[1] - exact).abs() < h.powi(5),
            "y(0.1) = {}, exact = {}",
            next[1],
            exact
        );
        // The combination itself deviates from the Taylor series only at h^5.
        assert!((next[1] - 1.1051708333333332).abs() < 1e-15);
    }

    #[test]
    fn four_differential_evaluations_per_step() {
        use std::cell::Cell;

        let evals = Cell::new(0u32);
        let counting = |y: &Point| {
            evals.set(evals.get() + 1);
            Point::zeros(y.dimension())
        };

        RungeKutta.advance(&point![0.0, 1.0], 0.1, &counting);
        assert_eq!(evals.get(), 4);
    }

    #[test]
    fn step_is_referentially_transparent() {
        let growth = |y: &Point| point![0.0, y[1]];
        let y = point![0.0, 2.0];

        let first = RungeKutta.advance(&y, 0.05, &growth);
        let second = RungeKutta.advance(&y, 0.05, &growth);

        assert_eq!(first, second);
        assert_eq!(y, point![0.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "dimensions must be equal")]
    fn differential_of_wrong_dimension_panics() {
        let wrong = |_: &Point| point![0.0];
        RungeKutta.advance(&point![0.0, 1.0], 0.1, &wrong);
    }

    #[test]
    fn runge_kutta_solver_counts_steps() {
        let mut solver = RungeKuttaSolver::runge_kutta(
            point![0.0, 1.0],
            |y: &Point| y[0] >= 0.5,
            0.1,
            |y: &Point| point![0.0, -y[1]],
        )
        .unwrap();

        let trajectory = solver.evaluate();
        assert_eq!(solver.steps() as usize, trajectory.len());
        assert_eq!(trajectory.len(), 5);

        let last = trajectory.last().unwrap();
        assert!((last[1] - (-last[0]).exp()).abs() < 1e-6);
    }
}
