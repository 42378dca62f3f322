use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controllers::explorer::FrameRequestPort;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::ports::renderer::InteractiveControllerRendererPort;
use crate::core::actions::render_frame::render_frame::RenderFrameError;
use crate::core::data::render_request::RenderRequest;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    renderer: Box<dyn InteractiveControllerRendererPort>,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new<R>(renderer: R, presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self
    where
        R: InteractiveControllerRendererPort + 'static,
    {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            renderer: Box::new(renderer),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request`, replacing any request the worker has not picked up yet.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
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

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
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
            let result = shared.renderer.render(&request, &cancel_token);
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => {
                    log::debug!(
                        "generation {job_generation}: rendered {}x{} in {render_duration:?}",
                        request.surface.width(),
                        request.surface.height()
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        view: request.view,
                        render_duration,
                    })
                }
                Err(RenderFrameError::Cancelled(_)) => {
                    log::trace!("generation {job_generation}: cancelled");
                    continue;
                }
                Err(err) => {
                    log::error!("generation {job_generation}: {err}");

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
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
}

impl FrameRequestPort for InteractiveController {
    fn request_frame(&mut self, request: RenderRequest) {
        self.submit_request(request);
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::core::actions::cancellation::{CancelToken, Cancelled};
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use crate::core::data::surface::SurfaceSize;
    use crate::core::data::view_state::ViewState;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;
    use crate::core::fractals::mandelbrot::frame_renderer::{FrameRenderError, FrameRenderer};
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

    const BLOCKING_WIDTH: u32 = 97;

    struct FailingRenderer;

    impl InteractiveControllerRendererPort for FailingRenderer {
        fn render(
            &self,
            request: &RenderRequest,
            _cancel: &dyn CancelToken,
        ) -> Result<PixelBuffer, FrameRenderError> {
            Err(RenderFrameError::Algorithm(
                MandelbrotError::PixelOutsideSurface {
                    pixel: Point { x: -1, y: 0 },
                    surface: request.surface,
                },
            ))
        }
    }

    /// Holds requests of `BLOCKING_WIDTH` until they are cancelled and renders
    /// everything else normally.
    struct BlockingRenderer {
        inner: FrameRenderer,
        started: Arc<AtomicBool>,
    }

    impl InteractiveControllerRendererPort for BlockingRenderer {
        fn render(
            &self,
            request: &RenderRequest,
            cancel: &dyn CancelToken,
        ) -> Result<PixelBuffer, FrameRenderError> {
            if request.surface.width() != BLOCKING_WIDTH {
                return InteractiveControllerRendererPort::render(&self.inner, request, cancel);
            }

            self.started.store(true, Ordering::Release);

            let deadline = Instant::now() + Duration::from_secs(5);
            while Instant::now() < deadline {
                if cancel.is_cancelled() {
                    return Err(RenderFrameError::Cancelled(Cancelled));
                }
                thread::sleep(Duration::from_millis(1));
            }

            Ok(PixelBuffer::new(request.surface))
        }
    }

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(port: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = port.take_events();
            if !events.is_empty() {
                return events;
            }
            if start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn create_controller(port: &Arc<MockPresenterPort>) -> InteractiveController {
        let renderer = FrameRenderer::from_config(&MandelbrotConfig::default()).unwrap();

        InteractiveController::new(
            renderer,
            Arc::clone(port) as Arc<dyn InteractiveControllerPresenterPort>,
        )
    }

    fn small_request() -> RenderRequest {
        RenderRequest::new(ViewState::default(), SurfaceSize::new(4, 3).unwrap())
    }

    fn extract_generation(events: &[RenderEvent]) -> u64 {
        events
            .iter()
            .find_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(err) => Some(err.generation),
            })
            .expect("should have at least one event with a generation")
    }

    #[test]
    fn submitted_request_emits_full_frame() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        let generation = controller.submit_request(small_request());
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert!(generation > 0);
                    assert_eq!(frame.view, ViewState::default());
                    assert_eq!(frame.pixel_buffer.surface(), small_request().surface);
                    assert_eq!(frame.pixel_buffer.buffer().len(), 4 * 3 * 4);
                    saw_frame = true;
                }
                RenderEvent::Error(error) => {
                    panic!("unexpected render error: {}", error.message);
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn frame_matches_inline_render() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);
        let request = small_request();

        controller.submit_request(request);
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));

        let expected = FrameRenderer::from_config(&MandelbrotConfig::default())
            .unwrap()
            .render(&request)
            .unwrap();
        match events.first() {
            Some(RenderEvent::Frame(frame)) => assert_eq!(frame.pixel_buffer, expected),
            other => panic!("expected a frame, got {other:?}"),
        }

        controller.shutdown();
    }

    #[test]
    fn generation_ids_increment() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        controller.submit_request(small_request());
        let events_a = wait_for_events(port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");
        let gen_a = extract_generation(&events_a);

        controller.submit_request(small_request());
        let events_b = wait_for_events(port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");
        let gen_b = extract_generation(&events_b);

        assert!(gen_b > gen_a, "generation B ({gen_b}) should exceed A ({gen_a})");

        controller.shutdown();
    }

    #[test]
    fn last_completed_generation_starts_at_zero() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn last_completed_generation_updates_after_frame() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        let submitted = controller.submit_request(small_request());
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let completed = extract_generation(&events);

        assert_eq!(completed, submitted);
        assert_eq!(controller.last_completed_generation(), completed);

        controller.shutdown();
    }

    #[test]
    fn rapid_requests_do_not_emit_cancellation_errors() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);
        let request = RenderRequest::new(ViewState::default(), SurfaceSize::new(64, 48).unwrap());

        for _ in 0..5 {
            controller.submit_request(request);
        }

        thread::sleep(Duration::from_millis(500));
        let events = port.take_events();

        for event in &events {
            if let RenderEvent::Error(err) = event {
                panic!("cancellation should not emit errors: {}", err.message);
            }
        }

        let frame_count = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Frame(_)))
            .count();
        assert!(frame_count >= 1, "expected at least one frame, got {frame_count}");

        controller.shutdown();
    }

    #[test]
    fn newest_request_is_always_rendered() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);
        let request = RenderRequest::new(ViewState::default(), SurfaceSize::new(64, 48).unwrap());

        let mut last_gen = 0;
        for _ in 0..5 {
            last_gen = controller.submit_request(request);
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.last_completed_generation() != last_gen && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }

        let max_emitted = port
            .take_events()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(_) => None,
            })
            .max()
            .unwrap_or(0);

        assert_eq!(max_emitted, last_gen);

        controller.shutdown();
    }

    #[test]
    fn request_frame_submits_through_the_port() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        controller.request_frame(small_request());
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));

        assert_eq!(extract_generation(&events), 1);

        controller.shutdown();
    }

    #[test]
    fn render_failure_is_presented_with_its_generation() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = InteractiveController::new(
            FailingRenderer,
            Arc::clone(&port) as Arc<dyn InteractiveControllerPresenterPort>,
        );

        let generation = controller.submit_request(small_request());
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));

        match events.as_slice() {
            [RenderEvent::Error(error)] => {
                assert_eq!(error.generation, generation);
                assert!(error.message.contains("outside the 4x3 surface"));
            }
            other => panic!("expected a single error event, got {other:?}"),
        }
        assert_eq!(controller.last_completed_generation(), generation);

        controller.shutdown();
    }

    #[test]
    fn cancelled_render_is_never_presented() {
        let port = Arc::new(MockPresenterPort::default());
        let started = Arc::new(AtomicBool::new(false));
        let renderer = BlockingRenderer {
            inner: FrameRenderer::from_config(&MandelbrotConfig::default()).unwrap(),
            started: Arc::clone(&started),
        };
        let mut controller = InteractiveController::new(
            renderer,
            Arc::clone(&port) as Arc<dyn InteractiveControllerPresenterPort>,
        );

        let blocked = controller.submit_request(RenderRequest::new(
            ViewState::default(),
            SurfaceSize::new(BLOCKING_WIDTH, 3).unwrap(),
        ));

        let deadline = Instant::now() + Duration::from_secs(2);
        while !started.load(Ordering::Acquire) && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(started.load(Ordering::Acquire), "blocking render never started");

        let latest = controller.submit_request(small_request());
        let events = wait_for_events(port.as_ref(), Duration::from_secs(2));

        match events.as_slice() {
            [RenderEvent::Frame(frame)] => {
                assert_eq!(frame.generation, latest);
                assert_eq!(frame.pixel_buffer.surface(), small_request().surface);
            }
            other => panic!("expected only the latest frame, got {other:?}"),
        }
        assert_ne!(controller.last_completed_generation(), blocked);
        assert_eq!(controller.last_completed_generation(), latest);

        controller.shutdown();
    }

    #[test]
    fn shutdown_is_idempotent() {
        let port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&port);

        controller.shutdown();
        controller.shutdown();

        assert!(port.take_events().is_empty());
    }

    #[test]
    fn render_error_display_names_generation() {
        let error = RenderError {
            generation: 7,
            message: "boom".to_string(),
        };

        assert_eq!(error.to_string(), "render 7 failed: boom");
    }
}
