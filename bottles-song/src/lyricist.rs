use crate::drinker::{Drinker, Examine};
use crate::error::SongError;
use crate::lyrics::{Lyrics, Sheet};
use crate::wall::Inventory;

/// Writes a whole verse about an inventory.
pub trait VerseWriter {
    fn verse(&self, wall: &mut dyn Inventory) -> Result<Lyrics, SongError>;
}

/// Composes both lines of a verse, asking its drinker what happens in between.
#[derive(Debug, Default, Clone)]
pub struct Lyricist<D = Drinker> {
    drinker: D,
}

impl Lyricist {
    pub fn new() -> Self {
        Self { drinker: Drinker }
    }
}

impl<D: Examine> Lyricist<D> {
    pub fn with_drinker(drinker: D) -> Self {
        Self { drinker }
    }

    /// Writes the verse for `wall` onto `sheet` and hands the sheet back.
    ///
    /// The opening line describes the wall as found; the closing line names
    /// the action taken and then describes the wall as it was left.
    pub fn verse_onto<S: Sheet>(
        &self,
        wall: &mut dyn Inventory,
        mut sheet: S,
    ) -> Result<S, SongError> {
        sheet.write(&format!(
            "{}, {}.",
            describe_wall(wall),
            wall.describe_contents()
        ));

        let action = self.describe_and_take_action(wall)?;
        sheet.write(&format!("{action}, {}.", describe_wall(wall)));

        Ok(sheet)
    }

    fn describe_and_take_action(&self, wall: &mut dyn Inventory) -> Result<String, SongError> {
        let mut action = self.drinker.examine(wall);
        action.perform()?;
        action.description()
    }
}

impl<D: Examine> VerseWriter for Lyricist<D> {
    fn verse(&self, wall: &mut dyn Inventory) -> Result<Lyrics, SongError> {
        self.verse_onto(wall, Lyrics::new())
    }
}

fn describe_wall(wall: &dyn Inventory) -> String {
    format!("{} on the wall", wall.describe_contents())
}

#[cfg(test)]
mod tests {
    use super::{Lyricist, VerseWriter};
    use crate::action::{Action, ActionKind};
    use crate::drinker::Examine;
    use crate::error::{SongError, WallError};
    use crate::lyrics::{Lyrics, Sheet};
    use crate::wall::{Inventory, Wall};

    struct Sip<'w> {
        wall: &'w mut dyn Inventory,
        performed: bool,
    }

    impl Action for Sip<'_> {
        fn kind(&self) -> ActionKind {
            ActionKind::Drink
        }

        fn perform(&mut self) -> Result<(), WallError> {
            self.wall.take(1.0)?;
            self.performed = true;
            Ok(())
        }

        fn description(&self) -> Result<String, SongError> {
            if self.performed {
                Ok("have a sip".to_string())
            } else {
                Err(SongError::NotPerformed)
            }
        }
    }

    struct Sipper;

    impl Examine for Sipper {
        fn examine<'w>(&self, wall: &'w mut dyn Inventory) -> Box<dyn Action + 'w> {
            Box::new(Sip {
                wall,
                performed: false,
            })
        }
    }

    #[test]
    fn writes_verse_for_many_bottles() {
        let mut wall = Wall::new(99);
        let lyrics = Lyricist::new().verse(&mut wall).unwrap();
        assert_eq!(
            lyrics.publish(),
            "99 bottles of beer on the wall, 99 bottles of beer.\n\
             Take one down and pass it around, 98 bottles of beer on the wall.\n"
        );
        assert_eq!(wall.bottles(), 98);
    }

    #[test]
    fn writes_verse_for_last_bottle() {
        let mut wall = Wall::new(1);
        let lyrics = Lyricist::new().verse(&mut wall).unwrap();
        assert_eq!(
            lyrics.publish(),
            "1 bottle of beer on the wall, 1 bottle of beer.\n\
             Take it down and pass it around, no more bottles of beer on the wall.\n"
        );
    }

    #[test]
    fn writes_verse_for_empty_wall() {
        let mut wall = Wall::new(0);
        let lyrics = Lyricist::new().verse(&mut wall).unwrap();
        assert_eq!(
            lyrics.publish(),
            "No more bottles of beer on the wall, no more bottles of beer.\n\
             Go to the store and buy some more, 99 bottles of beer on the wall.\n"
        );
    }

    #[test]
    fn uses_injected_drinker() {
        let mut wall = Wall::new(3);
        let lyrics = Lyricist::with_drinker(Sipper).verse(&mut wall).unwrap();
        assert_eq!(
            lyrics.publish(),
            "3 bottles of beer on the wall, 3 bottles of beer.\n\
             Have a sip, 2 bottles of beer on the wall.\n"
        );
    }

    #[test]
    fn drinker_errors_abort_the_verse() {
        let mut wall = Wall::new(0);
        let result = Lyricist::with_drinker(Sipper).verse(&mut wall);
        assert_eq!(result, Err(SongError::Wall(WallError::OutOfStock)));
    }

    #[test]
    fn writes_onto_injected_sheet() {
        let mut wall = Wall::new(2);
        let mut sheet = Lyrics::new();
        sheet.write("intro.");
        let sheet = Lyricist::new().verse_onto(&mut wall, sheet).unwrap();
        assert_eq!(sheet.lines().len(), 3);
        assert_eq!(sheet.lines()[0], "Intro.");
    }
}
