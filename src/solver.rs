//! Generic stepping solver.
//!
//! A [`Solver`] composes an initial [`Point`], a stepping [`Method`], a
//! termination [`Limit`], a differential function, and a fixed step size
//! into an iterator over successive states. Each call to `next()` advances
//! the owned current point by one step; iteration ends once the limit
//! predicate holds for the current point.
//!
//! Lifecycle hooks ([`Hooks`]) run around the whole run and around each
//! step. They exist for diagnostics only: the stepping algorithm never
//! depends on what a hook does.

use crate::point::Point;

/// Right-hand side of an ODE system: the instantaneous rate of change at a
/// given state.
///
/// By the framework's convention component 0 of a [`Point`] is the
/// independent variable and is advanced by the stepping method itself, so a
/// differential should report a zero rate for component 0.
///
/// Implementations must be pure, must not mutate their input, and must
/// return a point of the same dimension — methods evaluate the differential
/// several times per step against the same pre-step point.
///
/// Any `Fn(&Point) -> Point` closure is a differential:
///
/// ```
/// use odestep::{point, Differential};
///
/// // dy/dt = -y
/// let decay = |y: &odestep::Point| point![0.0, -y[1]];
/// assert_eq!(decay.eval(&point![0.0, 2.0]), point![0.0, -2.0]);
/// ```
pub trait Differential {
    /// Evaluate the rate of change at `y`.
    fn eval(&self, y: &Point) -> Point;
}

impl<F: Fn(&Point) -> Point> Differential for F {
    fn eval(&self, y: &Point) -> Point {
        self(y)
    }
}

/// Termination predicate: decides whether integration must stop at a state.
///
/// `true` means no further step is produced from this point. The limit is
/// the sole cancellation mechanism of a run; bounded runs are expressed as
/// limits on the independent variable, non-finite-state guards as limits on
/// the dependent components.
pub trait Limit {
    /// Whether integration must stop at `y`.
    fn reached(&self, y: &Point) -> bool;
}

impl<F: Fn(&Point) -> bool> Limit for F {
    fn reached(&self, y: &Point) -> bool {
        self(y)
    }
}

/// A stepping method: advances a state by one step of size `step_size`.
///
/// Implementations must be referentially transparent, may evaluate the
/// differential any number of times, and must return a new point of the
/// same dimension as `current`. The framework convention that component 0
/// carries the independent variable is the method's to uphold: a method
/// advances component 0 by `step_size` alongside the dependent state.
pub trait Method {
    /// Compute the state one step after `current`.
    fn advance(&self, current: &Point, step_size: f64, differential: &dyn Differential) -> Point;
}

impl<F: Fn(&Point, f64, &dyn Differential) -> Point> Method for F {
    fn advance(&self, current: &Point, step_size: f64, differential: &dyn Differential) -> Point {
        self(current, step_size, differential)
    }
}

/// Optional lifecycle callbacks around a solver run.
///
/// Every hook defaults to a no-op. Hooks receive the step counter and/or
/// the current point for diagnostics; they cannot alter the stepping state.
#[derive(Default)]
pub struct Hooks {
    /// Runs once at the start of [`Solver::evaluate`], with the initial point.
    pub on_pre_solve: Option<Box<dyn FnMut(&Point)>>,
    /// Runs once after [`Solver::evaluate`] has drained the run, with the
    /// total number of steps taken.
    pub on_post_solve: Option<Box<dyn FnMut(u64)>>,
    /// Runs before each step, with the index of the step about to be taken
    /// and the pre-step point.
    pub on_pre_step: Option<Box<dyn FnMut(u64, &Point)>>,
    /// Runs after each step, with the number of steps taken so far and the
    /// newly computed point.
    pub on_post_step: Option<Box<dyn FnMut(u64, &Point)>>,
}

/// Errors from solver construction.
///
/// These cover invalid inputs only. Failures *during* integration —
/// dimension mismatches between the differential and the state — are
/// contract violations and panic at the call site, and non-finite values
/// arising from the arithmetic propagate per IEEE-754 rather than being
/// trapped.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Step size is not finite or not strictly positive.
    InvalidStepSize {
        /// The rejected step size.
        h: f64,
    },
    /// The initial point has dimension zero.
    EmptyInitialPoint,
    /// The initial point contains a NaN or infinite component.
    NonFiniteInitialPoint {
        /// Index of the first offending component.
        index: usize,
    },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidStepSize { h } => {
                write!(f, "step size {} must be finite and positive", h)
            }
            SolverError::EmptyInitialPoint => {
                write!(f, "initial point must have at least one component")
            }
            SolverError::NonFiniteInitialPoint { index } => {
                write!(f, "initial point component {} is not finite", index)
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Stateful fixed-step integration driver.
///
/// The solver owns its current point and overwrites it on every step. It is
/// an [`Iterator`] over the successive states *after* each step; the initial
/// point is not yielded. Iteration ends when the [`Limit`] fires, which makes
/// calling `next()` past exhaustion well-defined: it returns `None`.
///
/// A solver is consumed by its run; re-deriving a trajectory means
/// constructing a new solver.
///
/// # Example
///
/// ```
/// use odestep::{point, Point, RungeKutta, Solver};
///
/// // dy/dt = y from y(0) = 1, integrated until t >= 1.
/// let mut solver = Solver::new(
///     RungeKutta,
///     point![0.0, 1.0],
///     |y: &Point| y[0] >= 1.0,
///     0.01,
///     |y: &Point| point![0.0, y[1]],
/// )
/// .unwrap();
///
/// let trajectory = solver.evaluate();
/// let last = trajectory.last().unwrap();
/// assert!((last[1] - 1.0f64.exp()).abs() < 1e-8);
/// ```
pub struct Solver<M, F, L> {
    current: Point,
    step_size: f64,
    method: M,
    differential: F,
    limit: L,
    steps: u64,
    hooks: Hooks,
}

impl<M, F, L> Solver<M, F, L>
where
    M: Method,
    F: Differential,
    L: Limit,
{
    /// Create a solver with no-op hooks.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError`] if the step size is not finite and strictly
    /// positive, or if the initial point is empty or non-finite.
    pub fn new(
        method: M,
        initial: Point,
        limit: L,
        step_size: f64,
        differential: F,
    ) -> Result<Self, SolverError> {
        Self::with_hooks(
            method,
            initial,
            limit,
            step_size,
            differential,
            Hooks::default(),
        )
    }

    /// Create a solver with caller-supplied lifecycle hooks.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Solver::new`].
    pub fn with_hooks(
        method: M,
        initial: Point,
        limit: L,
        step_size: f64,
        differential: F,
        hooks: Hooks,
    ) -> Result<Self, SolverError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(SolverError::InvalidStepSize { h: step_size });
        }
        if initial.dimension() == 0 {
            return Err(SolverError::EmptyInitialPoint);
        }
        for index in 0..initial.dimension() {
            if !initial[index].is_finite() {
                return Err(SolverError::NonFiniteInitialPoint { index });
            }
        }

        Ok(Self {
            current: initial,
            step_size,
            method,
            differential,
            limit,
            steps: 0,
            hooks,
        })
    }

    /// The current state. Before any step this is the initial point; after a
    /// step it is the most recently computed point.
    pub fn current(&self) -> &Point {
        &self.current
    }

    /// The fixed step size.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether a further step will be produced. Equivalent to the limit not
    /// holding at the current point; querying it never mutates the solver.
    pub fn has_next(&self) -> bool {
        !self.limit.reached(&self.current)
    }

    /// Run the solver to exhaustion and collect the full trajectory.
    ///
    /// Fires the pre-solve hook once, produces one point per remaining step
    /// in order until the limit fires, then fires the post-solve hook once
    /// with the total step count. If the limit already holds on the current
    /// point the trajectory is empty, but both hooks still run exactly once.
    pub fn evaluate(&mut self) -> Vec<Point> {
        if let Some(hook) = self.hooks.on_pre_solve.as_mut() {
            hook(&self.current);
        }

        let mut trajectory = Vec::new();
        while let Some(point) = self.next() {
            trajectory.push(point);
        }

        if let Some(hook) = self.hooks.on_post_solve.as_mut() {
            hook(self.steps);
        }
        trajectory
    }
}

impl<M, F, L> Iterator for Solver<M, F, L>
where
    M: Method,
    F: Differential,
    L: Limit,
{
    type Item = Point;

    /// Advance by one step and yield the new current point, or `None` once
    /// the limit holds.
    ///
    /// # Panics
    ///
    /// Panics if the method or the differential produce a point whose
    /// dimension differs from the current state's.
    fn next(&mut self) -> Option<Point> {
        if self.limit.reached(&self.current) {
            return None;
        }

        if let Some(hook) = self.hooks.on_pre_step.as_mut() {
            hook(self.steps, &self.current);
        }

        let next = self
            .method
            .advance(&self.current, self.step_size, &self.differential);
        // Methods must preserve dimension; catch a misbehaving one here
        // rather than on the following step's arithmetic.
        if next.dimension() != self.current.dimension() {
            panic!(
                "method changed the state dimension: was {} now {}",
                self.current.dimension(),
                next.dimension()
            );
        }
        self.current = next;
        self.steps += 1;

        if let Some(hook) = self.hooks.on_post_step.as_mut() {
            hook(self.steps, &self.current);
        }

        Some(self.current.clone())
    }
}
