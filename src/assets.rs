//! Animation frames.
//!
//! Frames are loaded once at startup and shared read-only afterwards. A
//! directory of assets has this layout:
//!
//! ```text
//! ship/*.txt        ship animation, played in file-name order
//! garbage/*.txt     obstacle shapes, one picked per launch
//! explosion/*.txt   explosion animation, played in file-name order
//! game_over.txt     banner shown when the ship is destroyed
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::canvas::{max_size, Frame};
use crate::error::ConfigurationError;

const BUILTIN_SHIP: [&str; 2] = [
    include_str!("../assets/ship/rocket_1.txt"),
    include_str!("../assets/ship/rocket_2.txt"),
];

const BUILTIN_GARBAGE: [&str; 5] = [
    include_str!("../assets/garbage/duck.txt"),
    include_str!("../assets/garbage/hubble.txt"),
    include_str!("../assets/garbage/lamp.txt"),
    include_str!("../assets/garbage/trash_large.txt"),
    include_str!("../assets/garbage/trash_small.txt"),
];

const BUILTIN_EXPLOSION: [&str; 4] = [
    include_str!("../assets/explosion/1.txt"),
    include_str!("../assets/explosion/2.txt"),
    include_str!("../assets/explosion/3.txt"),
    include_str!("../assets/explosion/4.txt"),
];

const BUILTIN_GAME_OVER: &str = include_str!("../assets/game_over.txt");

/// The complete, validated set of frames a game needs.
#[derive(Debug, Clone)]
pub struct Assets {
    ship: Arc<[Frame]>,
    garbage: Arc<[Frame]>,
    explosion: Arc<[Frame]>,
    game_over: Frame,
}

impl Assets {
    /// Frames compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let frames =
            |texts: &[&'static str]| -> Arc<[Frame]> { texts.iter().copied().map(Frame::new).collect() };
        Self {
            ship: frames(&BUILTIN_SHIP),
            garbage: frames(&BUILTIN_GARBAGE),
            explosion: frames(&BUILTIN_EXPLOSION),
            game_over: Frame::new(BUILTIN_GAME_OVER),
        }
    }

    /// Load frames from an asset directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a file or directory cannot be read, a frame set
    /// is empty, or a frame is blank.
    pub fn load(dir: &Path) -> Result<Self, ConfigurationError> {
        let assets = Self::from_frames(
            read_frame_dir(&dir.join("ship"))?,
            read_frame_dir(&dir.join("garbage"))?,
            read_frame_dir(&dir.join("explosion"))?,
            read_frame(&dir.join("game_over.txt"))?,
        )?;
        log::info!(
            "loaded assets from {}: {} ship, {} garbage, {} explosion frames",
            dir.display(),
            assets.ship.len(),
            assets.garbage.len(),
            assets.explosion.len()
        );
        Ok(assets)
    }

    /// Assemble assets from frames, checking that none are missing or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if a frame set is empty or any frame is blank.
    pub fn from_frames(
        ship: Vec<Frame>,
        garbage: Vec<Frame>,
        explosion: Vec<Frame>,
        game_over: Frame,
    ) -> Result<Self, ConfigurationError> {
        check_set("ship", &ship)?;
        check_set("garbage", &garbage)?;
        check_set("explosion", &explosion)?;
        check_set("game_over", std::slice::from_ref(&game_over))?;
        Ok(Self {
            ship: ship.into(),
            garbage: garbage.into(),
            explosion: explosion.into(),
            game_over,
        })
    }

    /// Ship animation frames.
    #[must_use]
    pub fn ship(&self) -> &Arc<[Frame]> {
        &self.ship
    }

    /// Obstacle shapes.
    #[must_use]
    pub fn garbage(&self) -> &Arc<[Frame]> {
        &self.garbage
    }

    /// Explosion animation frames.
    #[must_use]
    pub fn explosion(&self) -> &Arc<[Frame]> {
        &self.explosion
    }

    /// Game-over banner.
    #[must_use]
    pub const fn game_over(&self) -> &Frame {
        &self.game_over
    }

    /// Bounding size of the ship over all its frames.
    #[must_use]
    pub fn ship_size(&self) -> (u32, u32) {
        max_size(&self.ship)
    }
}

fn check_set(set: &'static str, frames: &[Frame]) -> Result<(), ConfigurationError> {
    if frames.is_empty() {
        return Err(ConfigurationError::EmptyFrameSet { set });
    }
    match frames.iter().position(Frame::is_blank) {
        Some(index) => Err(ConfigurationError::BlankFrame { set, index }),
        None => Ok(()),
    }
}

fn read_frame(path: &Path) -> Result<Frame, ConfigurationError> {
    fs::read_to_string(path)
        .map(Frame::new)
        .map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn read_frame_dir(dir: &Path) -> Result<Vec<Frame>, ConfigurationError> {
    let io_error = |source| ConfigurationError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.extension().is_some_and(|e| e == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|path| read_frame(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    fn asset_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "ship/b.txt", "B");
        write(dir.path(), "ship/a.txt", "A");
        write(dir.path(), "ship/notes.md", "ignored");
        write(dir.path(), "garbage/rock.txt", "##");
        write(dir.path(), "explosion/1.txt", "*");
        write(dir.path(), "game_over.txt", "GAME OVER");
        dir
    }

    #[test]
    fn test_builtin_is_valid() {
        let assets = Assets::builtin();
        assert!(Assets::from_frames(
            assets.ship().to_vec(),
            assets.garbage().to_vec(),
            assets.explosion().to_vec(),
            assets.game_over().clone(),
        )
        .is_ok());
        assert_eq!(assets.ship().len(), 2);
        assert_eq!(assets.explosion().len(), 4);
    }

    #[test]
    fn test_load_sorts_by_file_name() {
        let dir = asset_dir();
        let assets = Assets::load(dir.path()).unwrap();
        let ship: Vec<&str> = assets.ship().iter().map(Frame::text).collect();
        assert_eq!(ship, vec!["A", "B"]);
        assert_eq!(assets.game_over().text(), "GAME OVER");
    }

    #[test]
    fn test_missing_directory() {
        let dir = asset_dir();
        fs::remove_dir_all(dir.path().join("explosion")).unwrap();
        assert!(matches!(
            Assets::load(dir.path()),
            Err(ConfigurationError::Io { .. })
        ));
    }

    #[test]
    fn test_empty_set() {
        let dir = asset_dir();
        fs::remove_file(dir.path().join("garbage/rock.txt")).unwrap();
        assert!(matches!(
            Assets::load(dir.path()),
            Err(ConfigurationError::EmptyFrameSet { set: "garbage" })
        ));
    }

    #[test]
    fn test_blank_frame() {
        let dir = asset_dir();
        write(dir.path(), "explosion/2.txt", "  \n \n");
        assert!(matches!(
            Assets::load(dir.path()),
            Err(ConfigurationError::BlankFrame {
                set: "explosion",
                index: 1
            })
        ));
    }
}
