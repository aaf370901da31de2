use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use std::collections::BTreeSet;
use webshop::bestellung_actor::BestellungError;
use webshop::clients::{BestellungClient, KundeClient, ProduktdatenClient};
use webshop::model::{
    BestellStatus, BestellungCreate, BestellungQuery, Betrag, Kunde, KundeCreate, KundeId,
    PostenCreate, Produktdaten, ProduktdatenId, Rolle,
};
use webshop::produktdaten_actor::{ProduktdatenActionResult, ProduktdatenError};

/// Real Bestellung actor, mocked Kunde and Produktdaten actors.
struct Harness {
    kunden: MockClient<Kunde>,
    produktdaten: MockClient<Produktdaten>,
    bestellungen: BestellungClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Harness {
    fn new() -> Self {
        let kunden = MockClient::<Kunde>::new();
        let produktdaten = MockClient::<Produktdaten>::new();
        let (actor, bestellungen) = webshop::bestellung_actor::new(8);
        let handle = tokio::spawn(actor.run((
            KundeClient::new(kunden.client()),
            ProduktdatenClient::new(produktdaten.client()),
        )));
        Self {
            kunden,
            produktdaten,
            bestellungen,
            handle,
        }
    }

    async fn finish(self) {
        self.kunden.verify();
        self.produktdaten.verify();
        drop(self.bestellungen);
        self.handle.await.unwrap();
    }
}

fn kunde(id: u32) -> Kunde {
    Kunde::new(
        KundeId(id),
        KundeCreate {
            nachname: "Mustermann".into(),
            vorname: "Max".into(),
            email: "max@example.com".into(),
            newsletter: false,
            seit: None,
            rollen: BTreeSet::from([Rolle::Kunde]),
            passwort_hash: "hash".into(),
        },
    )
}

fn bestellung(posten: &[(u32, u32)]) -> BestellungCreate {
    BestellungCreate {
        kunde_id: KundeId(1),
        posten: posten
            .iter()
            .map(|&(id, anzahl)| PostenCreate {
                produktdaten_id: ProduktdatenId(id),
                anzahl,
            })
            .collect(),
    }
}

#[tokio::test]
async fn order_reserves_stock_and_fixes_prices() {
    let mut h = Harness::new();
    h.kunden.expect_get(KundeId(1)).return_ok(Some(kunde(1)));
    h.produktdaten
        .expect_action(ProduktdatenId(1))
        .return_ok(ProduktdatenActionResult::Reservieren(Betrag::from_cent(1999)));
    h.produktdaten
        .expect_action(ProduktdatenId(2))
        .return_ok(ProduktdatenActionResult::Reservieren(Betrag::from_cent(500)));

    let id = h
        .bestellungen
        .create_bestellung(bestellung(&[(1, 2), (2, 3)]))
        .await
        .unwrap();

    let gespeichert = h.bestellungen.get(id).await.unwrap().unwrap();
    assert_eq!(gespeichert.status, BestellStatus::Offen);
    assert_eq!(gespeichert.posten[0].einzelpreis, Betrag::from_cent(1999));
    assert_eq!(gespeichert.posten[1].einzelpreis, Betrag::from_cent(500));
    assert_eq!(gespeichert.gesamtpreis, Betrag::from_cent(2 * 1999 + 3 * 500));

    h.finish().await;
}

#[tokio::test]
async fn failed_reservation_releases_earlier_lines() {
    let mut h = Harness::new();
    h.kunden.expect_get(KundeId(1)).return_ok(Some(kunde(1)));
    h.produktdaten
        .expect_action(ProduktdatenId(1))
        .return_ok(ProduktdatenActionResult::Reservieren(Betrag::from_cent(1000)));
    h.produktdaten
        .expect_action(ProduktdatenId(2))
        .return_err(FrameworkError::EntityError(Box::new(
            ProduktdatenError::InsufficientStock {
                id: "produktdaten_2".into(),
                requested: 5,
                available: 1,
            },
        )));
    // Compensation for line 1.
    h.produktdaten
        .expect_action(ProduktdatenId(1))
        .return_ok(ProduktdatenActionResult::Freigeben(10));

    let err = h
        .bestellungen
        .create_bestellung(bestellung(&[(1, 2), (2, 5)]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BestellungError::Produktdaten(ProduktdatenError::InsufficientStock { requested: 5, .. })
    ));
    assert!(h
        .bestellungen
        .find(BestellungQuery::Alle)
        .await
        .unwrap()
        .is_empty());

    h.finish().await;
}

#[tokio::test]
async fn unknown_customer_reserves_nothing() {
    let mut h = Harness::new();
    h.kunden.expect_get(KundeId(1)).return_ok(None);

    let err = h
        .bestellungen
        .create_bestellung(bestellung(&[(1, 1)]))
        .await
        .unwrap_err();
    assert_eq!(err, BestellungError::KundeNotFound("kunde_1".into()));

    h.finish().await;
}

#[tokio::test]
async fn empty_order_is_rejected_before_any_call() {
    let h = Harness::new();

    let err = h
        .bestellungen
        .create_bestellung(bestellung(&[]))
        .await
        .unwrap_err();
    assert!(matches!(err, BestellungError::Validation(ref v) if v.felder() == vec!["posten"]));

    h.finish().await;
}

#[tokio::test]
async fn cancel_releases_stock_once() {
    let mut h = Harness::new();
    h.kunden.expect_get(KundeId(1)).return_ok(Some(kunde(1)));
    h.produktdaten
        .expect_action(ProduktdatenId(4))
        .return_ok(ProduktdatenActionResult::Reservieren(Betrag::from_cent(250)));
    h.produktdaten
        .expect_action(ProduktdatenId(4))
        .return_ok(ProduktdatenActionResult::Freigeben(7));

    let id = h
        .bestellungen
        .create_bestellung(bestellung(&[(4, 2)]))
        .await
        .unwrap();

    let storniert = h.bestellungen.cancel(id).await.unwrap();
    assert_eq!(storniert.status, BestellStatus::Storniert);
    assert_eq!(storniert.audit.version, 1);

    // A cancelled order can neither be cancelled again nor shipped.
    assert!(matches!(
        h.bestellungen.cancel(id).await,
        Err(BestellungError::IllegalState { status: BestellStatus::Storniert, .. })
    ));
    assert!(matches!(
        h.bestellungen.ship(id).await,
        Err(BestellungError::IllegalState { .. })
    ));

    h.finish().await;
}
