use crate::clients::{
    AdresseClient, BestellungClient, KundeClient, ProduktClient, ProduktdatenClient,
};
use crate::config::ActorConfig;
use tracing::{error, info};

/// Owns the running actors of the shop.
///
/// Dependencies are passed as run-time context, never at construction, so the graph can
/// be wired in any order:
///
/// ```text
/// Adresse      <- Kunde      <-+
/// Produktdaten <- Produkt      |
/// Produktdaten <---------------+- Bestellung
/// ```
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(&ActorConfig::default());
/// let id = system.produkt_client.create_produkt(params).await?;
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub kunde_client: KundeClient,
    pub adresse_client: AdresseClient,
    pub produkt_client: ProduktClient,
    pub produktdaten_client: ProduktdatenClient,
    pub bestellung_client: BestellungClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns all actors. Must be called from within a Tokio runtime.
    pub fn new(config: &ActorConfig) -> Self {
        let buffer = config.buffer_size;

        let (adresse_actor, adresse_client) = crate::adresse_actor::new(buffer);
        let (kunde_actor, kunde_client) = crate::kunde_actor::new(buffer);
        let (produktdaten_actor, produktdaten_client) = crate::produktdaten_actor::new(buffer);
        let (produkt_actor, produkt_client) = crate::produkt_actor::new(buffer);
        let (bestellung_actor, bestellung_client) = crate::bestellung_actor::new(buffer);

        let handles = vec![
            tokio::spawn(adresse_actor.run(())),
            tokio::spawn(kunde_actor.run(adresse_client.clone())),
            tokio::spawn(produktdaten_actor.run(())),
            tokio::spawn(produkt_actor.run(produktdaten_client.clone())),
            tokio::spawn(
                bestellung_actor.run((kunde_client.clone(), produktdaten_client.clone())),
            ),
        ];
        info!(buffer, "Shop system started");

        Self {
            kunde_client,
            adresse_client,
            produkt_client,
            produktdaten_client,
            bestellung_client,
            handles,
        }
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// An actor stops once the last client of its channel is gone, which includes the
    /// clones held by services and by other actors' contexts. Drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system...");

        drop(self.bestellung_client);
        drop(self.kunde_client);
        drop(self.adresse_client);
        drop(self.produkt_client);
        drop(self.produktdaten_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
