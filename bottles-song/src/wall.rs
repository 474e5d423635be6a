use tracing::trace;

use crate::error::WallError;

/// A countable stock of bottles.
///
/// The count can only move through [`take`](Inventory::take) and
/// [`shelf`](Inventory::shelf), both of which validate their quantity.
pub trait Inventory {
    fn describe_contents(&self) -> String;

    /// Removes `quantity` bottles, rounding fractional quantities up.
    fn take(&mut self, quantity: f64) -> Result<(), WallError>;

    /// Adds `quantity` bottles, rounding fractional quantities down.
    fn shelf(&mut self, quantity: f64) -> Result<(), WallError>;

    fn is_empty(&self) -> bool;

    fn is_last_one(&self) -> bool;
}

/// The wall the song is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    bottles: u32,
}

impl Wall {
    pub fn new(bottles: u32) -> Self {
        Self { bottles }
    }

    pub fn bottles(&self) -> u32 {
        self.bottles
    }

    pub fn take_one(&mut self) -> Result<(), WallError> {
        Inventory::take(self, 1.0)
    }

    pub fn shelf_one(&mut self) -> Result<(), WallError> {
        Inventory::shelf(self, 1.0)
    }

    /// Convenience over [`Inventory::take`] for integer and float quantities.
    pub fn take(&mut self, quantity: impl Into<f64>) -> Result<(), WallError> {
        Inventory::take(self, quantity.into())
    }

    /// Convenience over [`Inventory::shelf`] for integer and float quantities.
    pub fn shelf(&mut self, quantity: impl Into<f64>) -> Result<(), WallError> {
        Inventory::shelf(self, quantity.into())
    }
}

impl Inventory for Wall {
    fn describe_contents(&self) -> String {
        match self.bottles {
            0 => "no more bottles of beer".to_string(),
            1 => "1 bottle of beer".to_string(),
            n => format!("{n} bottles of beer"),
        }
    }

    fn take(&mut self, quantity: f64) -> Result<(), WallError> {
        if self.bottles == 0 {
            return Err(WallError::OutOfStock);
        }
        if quantity > f64::from(self.bottles) {
            return Err(WallError::InsufficientStock {
                requested: quantity,
                available: self.bottles,
            });
        }
        if quantity < 0.0 || !quantity.is_finite() {
            return Err(WallError::InvalidQuantity(quantity));
        }

        // quantity <= bottles, so its ceiling fits as well
        let taken = quantity.ceil() as u32;
        self.bottles -= taken;
        trace!(taken, remaining = self.bottles, "took bottles off the wall");
        Ok(())
    }

    fn shelf(&mut self, quantity: f64) -> Result<(), WallError> {
        if quantity < 0.0 || !quantity.is_finite() {
            return Err(WallError::InvalidQuantity(quantity));
        }

        let shelved = quantity.floor();
        let bottles = f64::from(self.bottles) + shelved;
        if bottles > f64::from(u32::MAX) {
            return Err(WallError::InvalidQuantity(quantity));
        }
        self.bottles = bottles as u32;
        trace!(shelved, remaining = self.bottles, "shelved bottles on the wall");
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.bottles == 0
    }

    fn is_last_one(&self) -> bool {
        self.bottles == 1
    }
}
