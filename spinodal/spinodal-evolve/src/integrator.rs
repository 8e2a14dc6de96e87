use spinodal_core::{ConfigError, Field2D, Grid, Parameters, Scalar, SolverError};
use spinodal_spectral::SpectralLaplacian;

use crate::rhs::CahnHilliard;
use crate::rk4::Rk4;
use crate::stability::rk4_dt_limit;
use crate::Evolver;

/// One snapshot handed to a consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// RK4 steps applied to produce `field`.
    pub step: u64,
    /// Simulation time, `step · dt`.
    pub time: Scalar,
    pub field: Field2D,
}

/// Pull-based stepper over the sequence `c₀, c₁, c₂, …`.
///
/// The cursor starts before `c₀`: the first pull returns the initial field and every
/// later pull applies exactly one step of the evolver. Only the current state is kept,
/// so the sequence cannot be rewound; start a new integrator from `c₀` to replay it.
/// Every returned field is a fresh copy.
#[derive(Clone, Debug)]
pub struct Integrator<E = Rk4<CahnHilliard>> {
    evolver: E,
    current: Field2D,
    dt: Scalar,
    steps: u64,
    started: bool,
    check_finite: bool,
}

impl Integrator {
    /// Cahn-Hilliard RK4 integrator for `grid` and `params`, starting from `initial`.
    pub fn new(grid: &Grid, params: &Parameters, initial: Field2D) -> Result<Self, SolverError> {
        let n = grid.n();
        if initial.dim() != (n, n) {
            return Err(SolverError::ShapeMismatch { expected: n, found: initial.dim() });
        }
        let laplacian = SpectralLaplacian::new(grid);
        let dt_limit = rk4_dt_limit(laplacian.table(), params.a());
        tracing::debug!(n, a = params.a(), dt = params.dt(), dt_limit, "cahn-hilliard integrator ready");
        if params.dt() > dt_limit {
            tracing::warn!(
                dt = params.dt(),
                dt_limit,
                "time step exceeds the estimated RK4 stability limit; the field will likely blow up"
            );
        }
        let rhs = CahnHilliard::with_laplacian(laplacian, params);
        Self::with_evolver(Rk4::new(rhs), params.dt(), initial)
    }
}

impl<E: Evolver<Field2D>> Integrator<E> {
    /// Integrator over any evolver. `dt` must be positive and finite.
    pub fn with_evolver(evolver: E, dt: Scalar, initial: Field2D) -> Result<Self, SolverError> {
        if !dt.is_finite() {
            return Err(ConfigError::NonFinite { name: "dt", value: dt }.into());
        }
        if dt <= 0.0 {
            return Err(ConfigError::NonPositiveDt { dt }.into());
        }
        Ok(Self { evolver, current: initial, dt, steps: 0, started: false, check_finite: true })
    }

    /// Toggle the post-step finiteness check (on by default).
    ///
    /// With the check off, non-finite values propagate silently into every later state.
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.check_finite = enabled;
        self
    }

    #[inline]
    pub fn current(&self) -> &Field2D { &self.current }

    #[inline]
    pub fn steps(&self) -> u64 { self.steps }

    #[inline]
    pub fn dt(&self) -> Scalar { self.dt }

    #[inline]
    pub fn time(&self) -> Scalar { self.steps as Scalar * self.dt }

    #[inline]
    pub fn evolver(&self) -> &E { &self.evolver }

    /// Apply one step and commit it without cloning the result.
    ///
    /// A non-finite result is still committed before the error is returned.
    fn step_in_place(&mut self) -> Result<(), SolverError> {
        let next = self.evolver.step(&self.current, self.dt)?;
        self.current = next;
        self.steps += 1;
        self.started = true;
        tracing::trace!(step = self.steps, time = self.time(), "rk4 step");

        if self.check_finite {
            let non_finite = self.current.non_finite_count();
            if non_finite > 0 {
                tracing::warn!(step = self.steps, non_finite, "non-finite values after step");
                return Err(SolverError::NumericalInstability { step: self.steps, non_finite });
            }
        }
        Ok(())
    }

    fn move_cursor(&mut self) -> Result<(), SolverError> {
        if self.started {
            self.step_in_place()
        } else {
            self.started = true;
            Ok(())
        }
    }

    /// Apply exactly one step and return the new state.
    pub fn step(&mut self) -> Result<Field2D, SolverError> {
        self.step_in_place()?;
        Ok(self.current.clone())
    }

    /// Next snapshot in the sequence.
    pub fn pull(&mut self) -> Result<Field2D, SolverError> {
        self.advance(0)
    }

    /// Discard `skip` snapshots and return the one after them.
    ///
    /// A consumer that pulls `skip_frame` times per displayed frame calls
    /// `advance(skip_frame - 1)`; starting fresh this shows `c₍skip_frame−1₎`,
    /// `c₍2·skip_frame−1₎`, and so on.
    ///
    /// Errors surface at the step that raised them; later pulls continue from
    /// whatever state was committed.
    pub fn advance(&mut self, skip: u64) -> Result<Field2D, SolverError> {
        for _ in 0..=skip {
            self.move_cursor()?;
        }
        Ok(self.current.clone())
    }

    /// Snapshot of the current state with its bookkeeping.
    pub fn frame(&self) -> Frame {
        Frame { step: self.steps, time: self.time(), field: self.current.clone() }
    }

    /// Stream of frames `skip_frame` steps apart.
    ///
    /// If nothing has been pulled yet the first frame is the initial state; every
    /// following frame lies `skip_frame` steps after the previous one, so frame `i`
    /// carries step `i · skip_frame`. Taking
    /// [`RunPlan::frame_count`](spinodal_core::RunPlan::frame_count) items gives a planned
    /// run's frame count and step labels; the fields shown one step earlier
    /// (`c₉, c₁₉, …` for a skip of 10) come from [`advance`](Self::advance)`(skip_frame - 1)`.
    pub fn frames(&mut self, skip_frame: u64) -> Result<Frames<'_, E>, ConfigError> {
        if skip_frame == 0 {
            return Err(ConfigError::ZeroSkipFrame);
        }
        Ok(Frames { integrator: self, skip_frame, failed: false })
    }
}

/// Iterator returned by [`Integrator::frames`]. Yields at most one error, then ends.
#[derive(Debug)]
pub struct Frames<'a, E> {
    integrator: &'a mut Integrator<E>,
    skip_frame: u64,
    failed: bool,
}

impl<E: Evolver<Field2D>> Frames<'_, E> {
    fn next_frame(&mut self) -> Result<Frame, SolverError> {
        let it = &mut *self.integrator;
        if !it.started {
            it.started = true;
        } else {
            for _ in 0..self.skip_frame {
                it.step_in_place()?;
            }
        }
        Ok(it.frame())
    }
}

impl<E: Evolver<Field2D>> Iterator for Frames<'_, E> {
    type Item = Result<Frame, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_frame();
        self.failed = item.is_err();
        Some(item)
    }
}
