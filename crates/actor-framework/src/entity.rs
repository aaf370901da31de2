//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Kunde, Produkt,
//! Bestellung, …) must implement to be managed by the generic `ResourceActor`. It
//! specifies associated types for IDs, DTOs, actions, queries, context and errors, and
//! provides lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! The following methods have default implementations:
//! - [`ActorEntity::on_create`] / [`ActorEntity::on_delete`] do nothing.
//! - [`ActorEntity::version`] returns `0`, which disables optimistic locking.
//! - [`ActorEntity::touch`] does nothing.
//! - [`ActorEntity::unique_key`] returns `None`, so no uniqueness is enforced.
//!
//! Override them when the entity carries a version, timestamps or a natural key.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types must satisfy,
/// we can write the `ResourceActor` logic *once* and reuse it everywhere.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Transactions
/// `on_update` and `handle_action` always run against a *copy* of the stored entity.
/// The copy replaces the stored entity only when the hook returns `Ok`, so a hook may
/// mutate `self` freely before it discovers a problem.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation and ordered so that
    /// query results come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Reservieren`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `find` requests.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather than
    /// **Per-Message Error Types**. Clients deal with a single `KundeError` type, and can recover it
    /// from a [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Returns `true` if this entity is part of the result set of `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Optimistic locking & uniqueness ---

    /// Current optimistic-lock version.
    fn version(&self) -> u32 {
        0
    }

    /// Called after an update has been applied and before it is committed.
    /// Versioned entities bump their version and modification timestamp here.
    fn touch(&mut self) {}

    /// Natural key that must be unique among all entities of this type.
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    /// Returning an error vetoes the deletion.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
