use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::app::Scene;
use crate::assets::AssetStore;

use super::{FrameSurface, Viewport};

/// Window-backed framebuffer. The pixel buffer has the scene's logical size and
/// is scaled to the window surface when presented.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    surface: Viewport,
    logical: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>, logical: Viewport) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = Viewport {
            width: size.width,
            height: size.height,
        };
        let pixels = Self::build_pixels(Arc::clone(&window), surface, logical)?;
        Ok(Self {
            window,
            pixels,
            surface,
            logical,
        })
    }

    pub fn resize(&mut self, surface: Viewport, logical: Viewport) -> Result<(), Error> {
        if surface.is_empty() || logical.is_empty() {
            return Ok(());
        }
        if surface == self.surface && logical == self.logical {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), surface, logical)?;
        self.surface = surface;
        self.logical = logical;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface: Viewport,
        logical: Viewport,
    ) -> Result<Pixels<'static>, Error> {
        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);
        Pixels::new(logical.width, logical.height, surface_texture)
    }

    pub(crate) fn render_scene(
        &mut self,
        scene: &mut dyn Scene,
        assets: &AssetStore,
    ) -> Result<(), Error> {
        if self.surface.is_empty() || self.logical.is_empty() {
            return Ok(());
        }
        let frame = self.pixels.frame_mut();
        let mut surface = FrameSurface::new(frame, self.logical.width, self.logical.height);
        scene.draw(&mut surface, assets);
        self.pixels.render()
    }
}
