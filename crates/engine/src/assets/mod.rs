mod level;
mod names;
mod store;
mod texture;

pub use level::{load_tile_grid, MapLoadError};
pub use names::TextureNameError;
pub use store::{AssetLoadError, AssetNotFoundError, AssetStore};
pub use texture::{Texture, TextureSizeError};
