//! Texture identifiers for sprite nodes.
//!
//! Nothing here touches image data. A sprite only remembers where its pixels
//! come from, which is enough for tooling and for tests to tell the two
//! lookup paths apart.

use crate::error::{SceneError, SceneResult};
use std::fmt;

/// Where a sprite's texture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextureSource {
    /// A resource file path, loaded directly.
    Path(String),
    /// A named frame in the sprite-frame cache.
    Frame(String),
}

impl TextureSource {
    /// Resolve an identifier by naming convention.
    ///
    /// Identifiers mentioning `res` are resource paths (`res/ui/play.png`).
    /// Anything else names a cached sprite frame; a leading `#` is accepted and
    /// stripped.
    pub fn parse(identifier: &str) -> SceneResult<Self> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SceneError::EmptyTextureName);
        }

        if identifier.contains("res") {
            return Ok(TextureSource::Path(identifier.to_string()));
        }

        match identifier.strip_prefix('#') {
            Some("") => Err(SceneError::EmptyTextureName),
            Some(name) => Ok(TextureSource::Frame(name.to_string())),
            None => Ok(TextureSource::Frame(identifier.to_string())),
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self, TextureSource::Frame(_))
    }
}

impl fmt::Display for TextureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureSource::Path(path) => write!(f, "{}", path),
            TextureSource::Frame(name) => write!(f, "#{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        assert_eq!(
            TextureSource::parse("res/ui/play.png"),
            Ok(TextureSource::Path("res/ui/play.png".into()))
        );
    }

    #[test]
    fn test_frame_name() {
        let source = TextureSource::parse("btn_play.png").unwrap();
        assert_eq!(source, TextureSource::Frame("btn_play.png".into()));
        assert_eq!(source.to_string(), "#btn_play.png");
        assert_eq!(TextureSource::parse("#btn_play.png").unwrap(), source);
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(TextureSource::parse(""), Err(SceneError::EmptyTextureName));
        assert_eq!(TextureSource::parse("  "), Err(SceneError::EmptyTextureName));
        assert_eq!(TextureSource::parse("#"), Err(SceneError::EmptyTextureName));
    }
}
