use tracing::{debug, instrument};

use crate::config::SongConfig;
use crate::error::SongError;
use crate::lyricist::{Lyricist, VerseWriter};
use crate::lyrics::Sheet;
use crate::wall::{Inventory, Wall};

/// Sings the countdown, one fresh wall per verse.
///
/// Both collaborators can be swapped: `lyricist` writes each verse and
/// `wall_factory` builds the inventory a verse starts from.
pub struct Bottles<V = Lyricist, F = fn(u32) -> Wall> {
    lyricist: V,
    wall_factory: F,
}

impl Bottles {
    pub fn new() -> Self {
        Self {
            lyricist: Lyricist::new(),
            wall_factory: Wall::new,
        }
    }
}

impl Default for Bottles {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F, W> Bottles<V, F>
where
    V: VerseWriter,
    F: Fn(u32) -> W,
    W: Inventory,
{
    pub fn with_collaborators(lyricist: V, wall_factory: F) -> Self {
        Self {
            lyricist,
            wall_factory,
        }
    }

    /// The whole song, from 99 bottles down to none.
    pub fn song(&self) -> Result<String, SongError> {
        let config = SongConfig::default();
        self.verses(config.start, config.end)
    }

    pub fn sing(&self, config: &SongConfig) -> Result<String, SongError> {
        self.verses(config.start, config.end)
    }

    /// Verses from `start` down to `end` inclusive, separated by a blank line.
    #[instrument(skip(self))]
    pub fn verses(&self, start: u32, end: u32) -> Result<String, SongError> {
        if start < end {
            return Err(SongError::InvalidRange { start, end });
        }

        let verses = (end..=start)
            .rev()
            .map(|bottles| self.verse(bottles))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(verses = verses.len(), "finished singing");
        Ok(verses.join("\n"))
    }

    pub fn verse(&self, bottles: u32) -> Result<String, SongError> {
        let mut wall = (self.wall_factory)(bottles);
        let lyrics = self.lyricist.verse(&mut wall)?;
        debug!(bottles, "wrote verse");
        Ok(lyrics.publish())
    }
}
