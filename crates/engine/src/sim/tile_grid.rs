use thiserror::Error;

/// Static tile map loaded once at startup.
///
/// Layout convention:
/// - `(0,0)` is the top-left tile, `y` grows downward.
/// - The tile at `(x,y)` is stored at `y * width + x` in both `indices` and `solids`.
/// - Queries outside `[0,width) x [0,height)` are total: index `0`, not solid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    indices: Vec<u32>,
    solids: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedMapError {
    #[error("map header is missing")]
    MissingHeader,
    #[error("map header must contain width and height, got '{header}'")]
    IncompleteHeader { header: String },
    #[error("invalid map dimension '{token}': expected a positive integer")]
    InvalidDimension { token: String },
    #[error("line {line}: odd token count {count}, tiles are (index, solid) pairs")]
    UnpairedToken { line: usize, count: usize },
    #[error("line {line}: invalid tile index '{token}'")]
    InvalidTileIndex { line: usize, token: String },
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
}

impl TileGrid {
    pub fn new(
        width: u32,
        height: u32,
        indices: Vec<u32>,
        solids: Vec<bool>,
    ) -> Result<Self, MalformedMapError> {
        if width == 0 {
            return Err(MalformedMapError::InvalidDimension {
                token: width.to_string(),
            });
        }
        if height == 0 {
            return Err(MalformedMapError::InvalidDimension {
                token: height.to_string(),
            });
        }
        let expected = tile_count(width, height)?;
        for actual in [indices.len(), solids.len()] {
            if actual != expected {
                return Err(MalformedMapError::TileCountMismatch { expected, actual });
            }
        }
        Ok(Self {
            width,
            height,
            indices,
            solids,
        })
    }

    /// Parses the level text format: a `"<width> <height>"` header followed by
    /// whitespace separated `(tileIndex, solidFlag)` pairs, top row first.
    /// A solid flag is set only by the literal token `1`.
    pub fn parse(text: &str) -> Result<Self, MalformedMapError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(MalformedMapError::MissingHeader)?;
        let mut header_tokens = header.split_whitespace();
        let (Some(width_token), Some(height_token)) = (header_tokens.next(), header_tokens.next())
        else {
            return Err(MalformedMapError::IncompleteHeader {
                header: header.to_string(),
            });
        };
        let width = parse_dimension(width_token)?;
        let height = parse_dimension(height_token)?;

        // Grows with the body; the header only sets the expected count.
        let mut indices = Vec::new();
        let mut solids = Vec::new();
        for (offset, line) in lines.enumerate() {
            let line_number = offset + 2;
            let tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.len() % 2 != 0 {
                return Err(MalformedMapError::UnpairedToken {
                    line: line_number,
                    count: tokens.len(),
                });
            }
            for pair in tokens.chunks_exact(2) {
                let index = pair[0].parse::<u32>().map_err(|_| {
                    MalformedMapError::InvalidTileIndex {
                        line: line_number,
                        token: pair[0].to_string(),
                    }
                })?;
                indices.push(index);
                solids.push(pair[1] == "1");
            }
        }

        Self::new(width, height, indices, solids)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn offset_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get_index(&self, x: i32, y: i32) -> u32 {
        self.offset_of(x, y)
            .and_then(|offset| self.indices.get(offset).copied())
            .unwrap_or(0)
    }

    pub fn get_solid(&self, x: i32, y: i32) -> bool {
        self.offset_of(x, y)
            .and_then(|offset| self.solids.get(offset).copied())
            .unwrap_or(false)
    }

    pub fn solid_count(&self) -> usize {
        self.solids.iter().filter(|solid| **solid).count()
    }
}

fn tile_count(width: u32, height: u32) -> Result<usize, MalformedMapError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| MalformedMapError::InvalidDimension {
            token: format!("{width}x{height}"),
        })
}

fn parse_dimension(token: &str) -> Result<u32, MalformedMapError> {
    match token.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(MalformedMapError::InvalidDimension {
            token: token.to_string(),
        }),
    }
}
