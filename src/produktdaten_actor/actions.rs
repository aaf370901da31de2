//! Custom actions for the Produktdaten actor.
//!
//! Stock is only ever changed through these actions, so every reservation and release
//! is serialized by the actor and can't oversell a variant.

use crate::model::Betrag;

/// Custom actions for product variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProduktdatenAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes `n` units out of stock for an order.
    ///
    /// # Errors
    /// Fails if `n` is zero or exceeds the available stock.
    Reservieren(u32),
    /// Puts `n` previously reserved units back into stock.
    Freigeben(u32),
}

/// Results from ProduktdatenActions - variants match 1:1 with ProduktdatenAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProduktdatenActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Unit price at the moment of the reservation.
    Reservieren(Betrag),
    /// Stock level after the release.
    Freigeben(u32),
}
