//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.
//!
//! The `impl ActorEntity` blocks live next to each actor (`kunde_actor::entity`, ...);
//! this module only holds the data, the DTOs and the validation rules.

/// Declares a type-safe `u32` identifier.
///
/// The generated type displays with a prefix (`kunde_1`) in logs and serializes as the
/// bare number.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod adresse;
pub mod audit;
pub mod betrag;
pub mod bestellung;
pub mod kunde;
pub mod produkt;
pub mod produktdaten;
pub mod validierung;

pub use adresse::*;
pub use audit::*;
pub use betrag::*;
pub use bestellung::*;
pub use kunde::*;
pub use produkt::*;
pub use produktdaten::*;
pub use validierung::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_prefix_and_serialize_bare() {
        let id = KundeId(7);
        assert_eq!(id.to_string(), "kunde_7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(serde_json::from_str::<BestellungId>("3").unwrap(), BestellungId(3));
    }
}
