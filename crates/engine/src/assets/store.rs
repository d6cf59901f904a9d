use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::names::{validate_texture_name, TextureNameError};
use super::texture::Texture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset '{name}' could not be found")]
pub struct AssetNotFoundError {
    pub name: String,
}

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error(transparent)]
    InvalidName(#[from] TextureNameError),
    #[error("failed to load texture '{name}' from {path}: {source}")]
    Decode {
        name: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Textures by name, loaded once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct AssetStore {
    textures: HashMap<String, Texture>,
}

impl AssetStore {
    /// Loads `<texture_dir>/<name>.png` for every name. Any failure aborts the
    /// whole load; a partially populated store is never returned.
    pub fn load<'a>(
        texture_dir: &Path,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, AssetLoadError> {
        let mut store = Self::default();
        for name in names {
            if store.textures.contains_key(name) {
                continue;
            }
            let path = texture_path(texture_dir, name)?;
            let texture = Texture::decode_png(&path).map_err(|source| AssetLoadError::Decode {
                name: name.to_string(),
                path: path.clone(),
                source,
            })?;
            info!(
                texture = name,
                width = texture.width(),
                height = texture.height(),
                "texture_loaded"
            );
            store.textures.insert(name.to_string(), texture);
        }
        Ok(store)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        texture: Texture,
    ) -> Result<(), TextureNameError> {
        let name = name.into();
        validate_texture_name(&name)?;
        self.textures.insert(name, texture);
        Ok(())
    }

    pub fn get_asset(&self, name: &str) -> Result<&Texture, AssetNotFoundError> {
        self.textures.get(name).ok_or_else(|| AssetNotFoundError {
            name: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

fn texture_path(texture_dir: &Path, name: &str) -> Result<PathBuf, TextureNameError> {
    validate_texture_name(name)?;
    Ok(texture_dir.join(format!("{name}.png")))
}
