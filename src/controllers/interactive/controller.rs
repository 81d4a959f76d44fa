use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::burning_ship::config::BurningShipConfig;
use crate::core::fractals::burning_ship::engine::FractalEngine;
use crate::core::fractals::burning_ship::errors::EngineError;
use crate::core::viewport::view_state::ViewState;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, ViewState)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

struct Worker {
    engine: FractalEngine,
    colour_map: Box<dyn ColourMap<u32>>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    config: BurningShipConfig,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    /// Allocates the engine on the calling thread and hands it to a new
    /// worker thread.
    pub fn new(
        config: BurningShipConfig,
        colour_map: Box<dyn ColourMap<u32>>,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Result<Self, EngineError> {
        let engine = FractalEngine::new(config)?;

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);
        let mut worker_state = Worker { engine, colour_map };

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, &mut worker_state);
        });

        Ok(Self {
            shared,
            config,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn config(&self) -> BurningShipConfig {
        self.config
    }

    /// Queues a render of `view`, replacing any request that has not started
    /// yet. Returns the generation id that the resulting event will carry.
    pub fn submit_request(&self, view: ViewState) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, view));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        // The flag is set under the request lock so the worker cannot miss it
        // between checking the flag and waiting on the condvar.
        {
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, worker: &mut Worker) {
        loop {
            let (job_generation, view) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(worker, &view, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    view,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderOutcome::Cancelled) => {
                    log::debug!("render {job_generation} cancelled");
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    log::warn!("render {job_generation} failed: {message}");
                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message,
                    })
                }
            };

            if job_generation != shared.generation.load(Ordering::Acquire) {
                continue;
            }

            shared.presenter_port.present(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        worker: &mut Worker,
        view: &ViewState,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderOutcome> {
        let canvas = worker.engine.canvas();

        let counts = worker
            .engine
            .generate_cancelable(view, cancel)
            .map_err(|_| RenderOutcome::Cancelled)?;

        if cancel.is_cancelled() {
            return Err(RenderOutcome::Cancelled);
        }

        let pixel_buffer =
            generate_pixel_buffer_cancelable(counts, worker.colour_map.as_ref(), canvas, cancel)
                .map_err(|e| match e {
                    GeneratePixelBufferCancelableError::Cancelled(_) => RenderOutcome::Cancelled,
                    GeneratePixelBufferCancelableError::ColourMap(err) => {
                        RenderOutcome::Error(format!("colour map error: {err}"))
                    }
                    GeneratePixelBufferCancelableError::PixelBuffer(err) => {
                        RenderOutcome::Error(err.to_string())
                    }
                })?;

        Ok(pixel_buffer)
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
