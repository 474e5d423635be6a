//! Verse generation for "99 Bottles of Beer".
//!
//! A song is produced one verse at a time: a [`Wall`] is described, a
//! [`Drinker`] picks the [`Action`] that applies to it, the action mutates the
//! wall, and a [`Lyricist`] writes both halves of the verse into [`Lyrics`].
//! [`Bottles`] drives the countdown and joins the verses.

pub mod action;
pub mod config;
pub mod drinker;
pub mod error;
pub mod lyricist;
pub mod lyrics;
pub mod song;
pub mod wall;

pub use action::{Action, ActionKind, Drink, Replenish};
pub use config::{ConfigError, SongConfig};
pub use drinker::{Drinker, Examine};
pub use error::{SongError, WallError};
pub use lyricist::{Lyricist, VerseWriter};
pub use lyrics::{Lyrics, Sheet};
pub use song::Bottles;
pub use wall::{Inventory, Wall};

/// Bottles put back on the wall after a trip to the store.
pub const RESTOCK_QUANTITY: u32 = 99;
