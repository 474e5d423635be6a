use crate::action::{Action, Drink, Replenish};
use crate::wall::Inventory;

/// Chooses the action that applies to an inventory.
pub trait Examine {
    fn examine<'w>(&self, wall: &'w mut dyn Inventory) -> Box<dyn Action + 'w>;
}

/// Drinks while there is beer, otherwise goes to the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct Drinker;

impl Examine for Drinker {
    fn examine<'w>(&self, wall: &'w mut dyn Inventory) -> Box<dyn Action + 'w> {
        if wall.is_empty() {
            Box::new(Replenish::new(wall))
        } else {
            Box::new(Drink::new(wall))
        }
    }
}
