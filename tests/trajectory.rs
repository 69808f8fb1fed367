//! Whole-run integration tests driving the solver over full trajectories.

use odestep::{point, Hooks, Point, RungeKutta, RungeKuttaSolver, Solver};

/// Harmonic oscillator y'' = -ω²y as a first-order system.
/// State: [t, y, y'].
fn oscillator(omega: f64) -> impl Fn(&Point) -> Point {
    move |y: &Point| point![0.0, y[2], -omega * omega * y[1]]
}

#[test]
fn harmonic_oscillator_tracks_closed_form() {
    let omega = 1.0;
    let period = 2.0 * std::f64::consts::PI;
    let h = 0.01;

    let mut solver = Solver::new(
        RungeKutta,
        point![0.0, 1.0, 0.0],
        move |y: &Point| y[0] >= period,
        h,
        oscillator(omega),
    )
    .unwrap();

    let trajectory = solver.evaluate();
    assert!(!trajectory.is_empty());

    // Compare against the exact solution at the trajectory's own time
    // values: y = cos(ωt), y' = -ω sin(ωt).
    let last = trajectory.last().unwrap();
    let t = last[0];
    assert!(
        (last[1] - (omega * t).cos()).abs() < 1e-6,
        "y({}) = {}, exact {}",
        t,
        last[1],
        (omega * t).cos()
    );
    assert!(
        (last[2] + omega * (omega * t).sin()).abs() < 1e-6,
        "y'({}) = {}",
        t,
        last[2]
    );

    // Energy y'^2/2 + ω²y²/2 is conserved by the exact flow; RK4 drift
    // over one period at h=0.01 stays far below the comparison tolerance.
    let energy = |p: &Point| 0.5 * p[2] * p[2] + 0.5 * omega * omega * p[1] * p[1];
    let drift = (energy(last) - energy(&trajectory[0])).abs();
    assert!(drift < 1e-8, "energy drift {}", drift);
}

#[test]
fn exponential_growth_reaches_e() {
    let mut solver = RungeKuttaSolver::runge_kutta(
        point![0.0, 1.0],
        |y: &Point| y[0] >= 1.0,
        0.01,
        |y: &Point| point![0.0, y[1]],
    )
    .unwrap();

    let trajectory = solver.evaluate();
    let last = trajectory.last().unwrap();

    assert!((last[1] - std::f64::consts::E).abs() < 1e-9);
    assert_eq!(trajectory.len(), 100);
    assert_eq!(solver.steps(), 100);
}

#[test]
fn trajectory_times_advance_by_step_size() {
    let h = 0.125;
    let mut solver = Solver::new(
        RungeKutta,
        point![0.0, 1.0],
        |y: &Point| y[0] >= 1.0,
        h,
        |y: &Point| point![0.0, -y[1]],
    )
    .unwrap();

    let trajectory = solver.evaluate();
    for (i, state) in trajectory.iter().enumerate() {
        assert_eq!(state[0], (i + 1) as f64 * h);
    }
}

#[test]
fn limit_stops_a_diverging_run() {
    // dy/dt = y² from y(0) = 1 blows up at t = 1. Overflow to infinity is
    // not trapped by the solver; the limit predicate is what ends the run.
    let mut solver = Solver::new(
        RungeKutta,
        point![0.0, 1.0],
        |y: &Point| !y.is_finite(),
        0.01,
        |y: &Point| point![0.0, y[1] * y[1]],
    )
    .unwrap();

    let trajectory = solver.evaluate();
    assert!(!trajectory.is_empty());
    assert!(!trajectory.last().unwrap().is_finite());
    // Divergence happens near t = 1, well before t = 2.
    assert!(trajectory.last().unwrap()[0] < 2.0);
}

#[test]
fn custom_hooks_observe_the_same_trajectory() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let observed: Rc<RefCell<Vec<Point>>> = Rc::new(RefCell::new(Vec::new()));
    let hooks = Hooks {
        on_post_step: Some(Box::new({
            let observed = Rc::clone(&observed);
            move |_: u64, point: &Point| observed.borrow_mut().push(point.clone())
        })),
        ..Hooks::default()
    };

    let mut solver = Solver::with_hooks(
        RungeKutta,
        point![0.0, 1.0],
        |y: &Point| y[0] >= 0.5,
        0.1,
        |y: &Point| point![0.0, y[1]],
        hooks,
    )
    .unwrap();

    let trajectory = solver.evaluate();
    assert_eq!(*observed.borrow(), trajectory);
}

#[test]
fn iterator_and_evaluate_agree() {
    let initial = point![0.0, 1.0];
    let differential = |y: &Point| point![0.0, y[1]];
    let limit = |y: &Point| y[0] >= 0.3;

    let mut evaluated = Solver::new(
        RungeKutta,
        initial.clone(),
        limit,
        0.1,
        differential,
    )
    .unwrap();
    let trajectory = evaluated.evaluate();

    let stepped: Vec<Point> = Solver::new(RungeKutta, initial, limit, 0.1, differential)
        .unwrap()
        .collect();

    assert_eq!(trajectory, stepped);
}
