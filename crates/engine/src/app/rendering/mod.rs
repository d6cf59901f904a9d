mod renderer;
mod surface;
mod transform;

pub use renderer::Renderer;
pub use surface::{DestTransform, FrameSurface, RenderSurface, SourceRect};
pub use transform::Viewport;
