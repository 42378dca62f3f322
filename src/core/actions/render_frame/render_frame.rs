use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;

/// Error type for frame rendering.
///
/// Cancellation is reported separately from failures so callers can drop
/// superseded frames without surfacing an error.
#[derive(Debug, Error)]
pub enum RenderFrameError<A, M> {
    #[error(transparent)]
    Cancelled(Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(A),
    #[error("colour map error: {0}")]
    ColourMap(M),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(PixelBufferError),
}

type FrameResult<Alg, CMap> = Result<
    PixelBuffer,
    RenderFrameError<<Alg as FractalAlgorithm>::Failure, <CMap as ColourMap>::Failure>,
>;

/// Renders every pixel of `surface` on the calling thread, row by row.
pub fn render_frame_serial<Alg, CMap>(
    surface: SurfaceSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameResult<Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<T = Alg::Success>,
{
    let mut data = allocate_frame(surface);

    for (y, row) in data.chunks_exact_mut(row_stride(surface)).enumerate() {
        render_row(y as i32, row, algorithm, colour_map, &NeverCancel)?;
    }

    PixelBuffer::from_data(surface, data).map_err(RenderFrameError::PixelBuffer)
}

/// Renders every pixel of `surface` with rows spread over rayon's thread pool.
///
/// Produces exactly the same buffer as [`render_frame_serial`]. For a render
/// that can be abandoned midway, use [`render_frame_parallel_cancelable`].
pub fn render_frame_parallel<Alg, CMap>(
    surface: SurfaceSize,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameResult<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T = Alg::Success> + Sync,
    CMap::Failure: Send,
{
    render_frame_parallel_cancelable(surface, algorithm, colour_map, &NeverCancel)
}

/// Parallel render that checks `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// Each worker owns a disjoint row slice of the output, and a cancelled or
/// failed render never yields a partially written buffer.
pub fn render_frame_parallel_cancelable<Alg, CMap, C>(
    surface: SurfaceSize,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> FrameResult<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<T = Alg::Success> + Sync,
    CMap::Failure: Send,
    C: CancelToken,
{
    let mut data = allocate_frame(surface);

    data.par_chunks_exact_mut(row_stride(surface))
        .enumerate()
        .try_for_each(|(y, row)| render_row(y as i32, row, algorithm, colour_map, cancel))?;

    PixelBuffer::from_data(surface, data).map_err(RenderFrameError::PixelBuffer)
}

fn allocate_frame(surface: SurfaceSize) -> PixelBufferData {
    vec![0; surface.pixel_count() * BYTES_PER_PIXEL]
}

fn row_stride(surface: SurfaceSize) -> usize {
    surface.width() as usize * BYTES_PER_PIXEL
}

fn render_row<Alg, CMap, C>(
    y: i32,
    row: &mut [u8],
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), RenderFrameError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<T = Alg::Success>,
    C: CancelToken,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(RenderFrameError::Cancelled(Cancelled));
        }

        let value = algorithm
            .compute(Point { x: x as i32, y })
            .map_err(RenderFrameError::Algorithm)?;
        let colour = colour_map.map(value).map_err(RenderFrameError::ColourMap)?;

        pixel.copy_from_slice(&colour.to_rgba());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl std::error::Error for StubError {}

    /// Encodes the pixel coordinate so tests can check placement.
    struct CoordinateAlgorithm {
        calls: AtomicUsize,
    }

    impl FractalAlgorithm for CoordinateAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok((pixel.x, pixel.y))
        }
    }

    struct FailingAlgorithm {}

    impl FractalAlgorithm for FailingAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    struct CoordinateColourMap {}

    impl ColourMap for CoordinateColourMap {
        type T = (i32, i32);
        type Failure = Infallible;

        fn map(&self, (x, y): (i32, i32)) -> Result<Colour, Self::Failure> {
            Ok(Colour::opaque(x as u8, y as u8, (x + y) as u8))
        }
    }

    fn coordinate_algorithm() -> CoordinateAlgorithm {
        CoordinateAlgorithm {
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn serial_render_writes_each_pixel_in_row_major_order() {
        let surface = SurfaceSize::new(3, 2).unwrap();
        let buffer =
            render_frame_serial(surface, &coordinate_algorithm(), &CoordinateColourMap {}).unwrap();

        assert_eq!(
            buffer.buffer(),
            &vec![
                0, 0, 0, 255, 1, 0, 1, 255, 2, 0, 2, 255, //
                0, 1, 1, 255, 1, 1, 2, 255, 2, 1, 3, 255,
            ]
        );
    }

    #[test]
    fn parallel_render_matches_serial_render() {
        let surface = SurfaceSize::new(37, 23).unwrap();
        let serial =
            render_frame_serial(surface, &coordinate_algorithm(), &CoordinateColourMap {}).unwrap();
        let parallel =
            render_frame_parallel(surface, &coordinate_algorithm(), &CoordinateColourMap {})
                .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn every_pixel_is_computed_exactly_once() {
        let surface = SurfaceSize::new(64, 48).unwrap();
        let algorithm = coordinate_algorithm();

        render_frame_parallel(surface, &algorithm, &CoordinateColourMap {}).unwrap();

        assert_eq!(algorithm.calls.load(Ordering::Relaxed), 64 * 48);
    }

    #[test]
    fn single_pixel_surface_renders() {
        let surface = SurfaceSize::new(1, 1).unwrap();
        let buffer =
            render_frame_parallel(surface, &coordinate_algorithm(), &CoordinateColourMap {})
                .unwrap();

        assert_eq!(buffer.buffer(), &vec![0, 0, 0, 255]);
    }

    #[test]
    fn algorithm_failure_is_propagated() {
        let surface = SurfaceSize::new(4, 4).unwrap();

        let result = render_frame_parallel(surface, &FailingAlgorithm {}, &CoordinateColourMap {});

        assert!(matches!(result, Err(RenderFrameError::Algorithm(StubError {}))));
    }

    #[test]
    fn cancelled_render_returns_no_buffer() {
        let surface = SurfaceSize::new(16, 16).unwrap();
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_frame_parallel_cancelable(
            surface,
            &coordinate_algorithm(),
            &CoordinateColourMap {},
            &token,
        );

        assert!(matches!(result, Err(RenderFrameError::Cancelled(Cancelled))));
    }

    #[test]
    fn cancelled_error_displays_transparently() {
        let err: RenderFrameError<StubError, Infallible> = RenderFrameError::Cancelled(Cancelled);

        assert_eq!(err.to_string(), "render cancelled");
    }
}
