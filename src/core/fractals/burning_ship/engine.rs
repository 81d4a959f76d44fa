use std::time::Instant;

use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::fractals::burning_ship::config::BurningShipConfig;
use crate::core::fractals::burning_ship::errors::EngineError;
use crate::core::fractals::burning_ship::step::step;
use crate::core::viewport::pixel_to_complex::pixel_to_complex_unchecked;
use crate::core::viewport::view_state::ViewState;

// Keeps rayon from splitting a step into jobs smaller than a few rows.
const MIN_PIXELS_PER_JOB: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Reset,
    Iterating,
    Done,
}

/// Escape-time engine holding the per-pixel coordinate field, iterate and
/// count buffers for one canvas.
///
/// The buffers are allocated once in [`FractalEngine::new`] and reused by
/// every pass.
#[derive(Debug)]
pub struct FractalEngine {
    config: BurningShipConfig,
    field: Vec<Complex>,
    iterate: Vec<Complex>,
    counts: Vec<u32>,
    phase: EnginePhase,
}

impl FractalEngine {
    pub fn new(config: BurningShipConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let pixels = config.canvas.pixel_count();
        let field = allocate_buffer(pixels, Complex::ZERO, "coordinate field")?;
        let iterate = allocate_buffer(pixels, Complex::ZERO, "iterate")?;
        let counts = allocate_buffer(pixels, 0, "count")?;

        Ok(Self {
            config,
            field,
            iterate,
            counts,
            phase: EnginePhase::Reset,
        })
    }

    #[must_use]
    pub fn config(&self) -> BurningShipConfig {
        self.config
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.config.canvas
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.config.max_iterations
    }

    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Row-major iteration counts of the last completed pass, or `None` if no
    /// pass has completed since the last reset.
    #[must_use]
    pub fn counts(&self) -> Option<&[u32]> {
        match self.phase {
            EnginePhase::Done => Some(&self.counts),
            EnginePhase::Reset | EnginePhase::Iterating => None,
        }
    }

    /// Runs a full pass for `view` and returns the counts.
    ///
    /// For cancel-aware generation, use [`FractalEngine::generate_cancelable`].
    pub fn generate(&mut self, view: &ViewState) -> &[u32] {
        match self.generate_cancelable_impl(view, &NeverCancel) {
            Ok(()) => &self.counts,
            Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
        }
    }

    /// Like [`FractalEngine::generate`], but checks `cancel` before every
    /// iteration step. A cancelled pass leaves the engine without readable
    /// counts.
    pub fn generate_cancelable<C: CancelToken>(
        &mut self,
        view: &ViewState,
        cancel: &C,
    ) -> Result<&[u32], Cancelled> {
        self.generate_cancelable_impl(view, cancel)?;

        Ok(&self.counts)
    }

    fn generate_cancelable_impl<C: CancelToken>(
        &mut self,
        view: &ViewState,
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let start = Instant::now();

        self.reset(view);
        self.phase = EnginePhase::Iterating;

        for iteration in 0..self.config.max_iterations {
            if cancel.is_cancelled() {
                log::debug!(
                    "burning ship pass cancelled after {iteration} of {} iterations",
                    self.config.max_iterations
                );
                return Err(Cancelled);
            }

            self.iterate_once();
        }

        self.phase = EnginePhase::Done;

        log::debug!(
            "burning ship pass {}x{} with {} iterations took {:?}",
            self.config.canvas.width(),
            self.config.canvas.height(),
            self.config.max_iterations,
            start.elapsed()
        );

        Ok(())
    }

    fn reset(&mut self, view: &ViewState) {
        let canvas = self.config.canvas;
        let bounds = view.bounds(canvas);

        self.field
            .par_iter_mut()
            .with_min_len(MIN_PIXELS_PER_JOB)
            .enumerate()
            .for_each(|(index, c)| {
                let (x, y) = canvas.position(index);
                *c = pixel_to_complex_unchecked(x, y, bounds, canvas);
            });

        self.iterate.fill(Complex::ZERO);
        self.counts.fill(0);
        self.phase = EnginePhase::Reset;
    }

    fn iterate_once(&mut self) {
        self.field
            .par_iter_mut()
            .zip(self.iterate.par_iter_mut())
            .zip(self.counts.par_iter_mut())
            .with_min_len(MIN_PIXELS_PER_JOB)
            .for_each(|((c, z), n)| step(c, z, n));
    }
}

fn allocate_buffer<T: Clone>(
    len: usize,
    value: T,
    buffer: &'static str,
) -> Result<Vec<T>, EngineError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|source| EngineError::Allocation {
            buffer,
            pixels: len,
            source,
        })?;
    data.resize(len, value);

    Ok(data)
}
