use crate::assets::AssetStore;

use super::input::InputSnapshot;
use super::rendering::RenderSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Frame contract between the host loop and a game session.
///
/// The host calls `update` once per fixed tick and `draw` once per presented
/// frame, never concurrently. `layout` maps the window size to the logical
/// resolution the session draws at; the host scales that to the window.
pub trait Scene {
    fn load(&mut self, _assets: &AssetStore) {}
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    fn draw(&mut self, surface: &mut dyn RenderSurface, assets: &AssetStore);
    fn layout(&self, outer_width: u32, outer_height: u32) -> (u32, u32);
    fn unload(&mut self) {}
    fn debug_title(&self) -> Option<String> {
        None
    }
    fn actor_count(&self) -> usize {
        0
    }
}
