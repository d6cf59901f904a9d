use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::sim::{MalformedMapError, TileGrid};

#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("failed to read map file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed map file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedMapError,
    },
}

pub fn load_tile_grid(path: &Path) -> Result<TileGrid, MapLoadError> {
    let text = fs::read_to_string(path).map_err(|source| MapLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = TileGrid::parse(&text).map_err(|source| MapLoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        solid_tiles = grid.solid_count(),
        "tile_grid_loaded"
    );
    Ok(grid)
}
