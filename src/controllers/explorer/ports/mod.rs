pub mod frame_request;
