//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `find`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Kunde { id: u32 }
/// #[derive(Debug)] struct KundeCreate;
/// #[derive(Debug)] struct KundeUpdate;
/// #[derive(Debug)] enum KundeAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum KundeError {
///     #[error("framework: {0}")]
///     Framework(#[from] FrameworkError),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Kunde {
///     type Id = u32;
///     type Create = KundeCreate;
///     type Update = KundeUpdate;
///     type Action = KundeAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = KundeError;
///
///     fn from_create_params(id: u32, _: KundeCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: KundeUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: KundeAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct KundeClient {
///     inner: ResourceClient<Kunde>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Kunde> for KundeClient {
///     type Error = KundeError;
///
///     fn inner(&self) -> &ResourceClient<Kunde> {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: KundeClient) {
///     // get(), find() and delete() are provided automatically!
///     let _ = client.get(1).await;
///     let _ = client.find(()).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error {
        Self::Error::from(e)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`, ordered by ID.
    #[tracing::instrument(skip(self))]
    async fn find(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
