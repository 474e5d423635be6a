use std::fmt;

use tracing::debug;

use crate::RESTOCK_QUANTITY;
use crate::error::{SongError, WallError};
use crate::wall::Inventory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Drink,
    Replenish,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Drink => f.write_str("drink"),
            ActionKind::Replenish => f.write_str("replenish"),
        }
    }
}

/// A one-shot change to an [`Inventory`] that can describe itself afterwards.
pub trait Action {
    fn kind(&self) -> ActionKind;

    /// Applies the change. Only the first successful call touches the
    /// inventory; later calls do nothing.
    fn perform(&mut self) -> Result<(), WallError>;

    /// Fails with [`SongError::NotPerformed`] until [`perform`](Action::perform)
    /// has succeeded.
    fn description(&self) -> Result<String, SongError>;
}

/// Borrowed inventory plus the "already performed" latch shared by every action.
struct Once<'w> {
    wall: &'w mut dyn Inventory,
    performed: bool,
}

impl<'w> Once<'w> {
    fn new(wall: &'w mut dyn Inventory) -> Self {
        Self {
            wall,
            performed: false,
        }
    }

    fn run(
        &mut self,
        kind: ActionKind,
        act: impl FnOnce(&mut (dyn Inventory + 'w)) -> Result<(), WallError>,
    ) -> Result<(), WallError> {
        if self.performed {
            return Ok(());
        }
        act(&mut *self.wall)?;
        self.performed = true;
        debug!(%kind, "performed action");
        Ok(())
    }

    fn ensure_performed(&self) -> Result<(), SongError> {
        if self.performed {
            Ok(())
        } else {
            Err(SongError::NotPerformed)
        }
    }
}

/// Takes a bottle down and passes it around.
pub struct Drink<'w> {
    once: Once<'w>,
    took_last_one: bool,
}

impl<'w> Drink<'w> {
    pub fn new(wall: &'w mut dyn Inventory) -> Self {
        Self {
            once: Once::new(wall),
            took_last_one: false,
        }
    }
}

impl Action for Drink<'_> {
    fn kind(&self) -> ActionKind {
        ActionKind::Drink
    }

    fn perform(&mut self) -> Result<(), WallError> {
        let took_last_one = &mut self.took_last_one;
        self.once.run(ActionKind::Drink, |wall| {
            // must be read before the take changes it
            *took_last_one = wall.is_last_one();
            wall.take(1.0)
        })
    }

    fn description(&self) -> Result<String, SongError> {
        self.once.ensure_performed()?;
        let noun = if self.took_last_one { "it" } else { "one" };
        Ok(format!("take {noun} down and pass it around"))
    }
}

/// Restocks the wall from the store.
pub struct Replenish<'w> {
    once: Once<'w>,
}

impl<'w> Replenish<'w> {
    pub fn new(wall: &'w mut dyn Inventory) -> Self {
        Self {
            once: Once::new(wall),
        }
    }
}

impl Action for Replenish<'_> {
    fn kind(&self) -> ActionKind {
        ActionKind::Replenish
    }

    fn perform(&mut self) -> Result<(), WallError> {
        self.once.run(ActionKind::Replenish, |wall| {
            wall.shelf(f64::from(RESTOCK_QUANTITY))
        })
    }

    fn description(&self) -> Result<String, SongError> {
        self.once.ensure_performed()?;
        Ok("go to the store and buy some more".to_string())
    }
}
