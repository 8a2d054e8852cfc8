//! Controller layer: intents collected while drawing a frame, applied to the
//! color-state controller once the frame is laid out.

pub mod orchestration;
