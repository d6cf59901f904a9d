use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureNameError {
    #[error("texture name must not be empty")]
    Empty,
    #[error("texture name '{name}' must be relative")]
    Absolute { name: String },
    #[error("texture name '{name}' must not contain '..'")]
    ParentTraversal { name: String },
    #[error("texture name '{name}' contains invalid character '{character}'")]
    InvalidCharacter { name: String, character: char },
}

/// Texture names double as relative paths under the texture directory, so they are
/// restricted to lowercase ASCII, digits, `_`, `-` and `/` separators.
pub(crate) fn validate_texture_name(name: &str) -> Result<(), TextureNameError> {
    if name.is_empty() {
        return Err(TextureNameError::Empty);
    }
    if name.starts_with('/') {
        return Err(TextureNameError::Absolute {
            name: name.to_string(),
        });
    }
    if name.contains("..") {
        return Err(TextureNameError::ParentTraversal {
            name: name.to_string(),
        });
    }
    let invalid = name.chars().find(|ch| {
        !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '/' | '-'))
    });
    match invalid {
        Some(character) => Err(TextureNameError::InvalidCharacter {
            name: name.to_string(),
            character,
        }),
        None => Ok(()),
    }
}
