use crate::core::data::render_request::RenderRequest;

/// Receives frame snapshots from the explorer; rendering may happen inline or elsewhere.
pub trait FrameRequestPort {
    fn request_frame(&mut self, request: RenderRequest);
}
