//! Response bodies with hypermedia links.
//!
//! Every resource carries its own `uri` plus the URIs of related resources, built from
//! the configured base URI.

use crate::model::{
    Adresse, AdresseId, Audit, BestellStatus, Bestellposten, Bestellung, BestellungId, Betrag,
    Kunde, KundeId, Produkt, ProduktId, Produktdaten, ProduktdatenId,
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Links {
    base_uri: String,
}

impl Links {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    pub fn kunde(&self, id: KundeId) -> String {
        format!("{}/kunden/{}", self.base_uri, id.0)
    }

    pub fn adresse(&self, id: AdresseId) -> String {
        format!("{}/adressen/{}", self.base_uri, id.0)
    }

    pub fn produkt(&self, id: ProduktId) -> String {
        format!("{}/produkte/{}", self.base_uri, id.0)
    }

    pub fn produktdaten(&self, id: ProduktdatenId) -> String {
        format!("{}/produktdaten/{}", self.base_uri, id.0)
    }

    pub fn bestellung(&self, id: BestellungId) -> String {
        format!("{}/bestellungen/{}", self.base_uri, id.0)
    }

    pub fn kunde_model(&self, kunde: Kunde) -> KundeModel {
        let uri = self.kunde(kunde.id);
        KundeModel {
            adressen_uri: format!("{uri}/adressen"),
            bestellungen_uri: format!("{uri}/bestellungen"),
            uri,
            kunde,
        }
    }

    pub fn adresse_model(&self, adresse: Adresse) -> AdresseModel {
        AdresseModel {
            uri: self.adresse(adresse.id),
            kunde_uri: self.kunde(adresse.kunde_id),
            adresse,
        }
    }

    pub fn produkt_model(&self, produkt: Produkt) -> ProduktModel {
        let uri = self.produkt(produkt.id);
        ProduktModel {
            produktdaten_uri: format!("{uri}/produktdaten"),
            uri,
            produkt,
        }
    }

    pub fn produktdaten_model(&self, produktdaten: Produktdaten) -> ProduktdatenModel {
        ProduktdatenModel {
            uri: self.produktdaten(produktdaten.id),
            produkt_uri: self.produkt(produktdaten.produkt_id),
            produktdaten,
        }
    }

    pub fn bestellung_model(&self, bestellung: Bestellung) -> BestellungModel {
        BestellungModel {
            uri: self.bestellung(bestellung.id),
            kunde_uri: self.kunde(bestellung.kunde_id),
            id: bestellung.id,
            kunde_id: bestellung.kunde_id,
            posten: bestellung
                .posten
                .into_iter()
                .map(|posten| PostenModel {
                    produktdaten_uri: self.produktdaten(posten.produktdaten_id),
                    posten,
                })
                .collect(),
            gesamtpreis: bestellung.gesamtpreis,
            status: bestellung.status,
            audit: bestellung.audit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KundeModel {
    #[serde(flatten)]
    pub kunde: Kunde,
    pub uri: String,
    pub adressen_uri: String,
    pub bestellungen_uri: String,
}

#[derive(Debug, Serialize)]
pub struct AdresseModel {
    #[serde(flatten)]
    pub adresse: Adresse,
    pub uri: String,
    pub kunde_uri: String,
}

#[derive(Debug, Serialize)]
pub struct ProduktModel {
    #[serde(flatten)]
    pub produkt: Produkt,
    pub uri: String,
    pub produktdaten_uri: String,
}

#[derive(Debug, Serialize)]
pub struct ProduktdatenModel {
    #[serde(flatten)]
    pub produktdaten: Produktdaten,
    pub uri: String,
    pub produkt_uri: String,
}

#[derive(Debug, Serialize)]
pub struct PostenModel {
    #[serde(flatten)]
    pub posten: Bestellposten,
    pub produktdaten_uri: String,
}

#[derive(Debug, Serialize)]
pub struct BestellungModel {
    pub id: BestellungId,
    pub kunde_id: KundeId,
    pub posten: Vec<PostenModel>,
    pub gesamtpreis: Betrag,
    pub status: BestellStatus,
    #[serde(flatten)]
    pub audit: Audit,
    pub uri: String,
    pub kunde_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BestellungCreate, PostenCreate};

    #[test]
    fn order_links_point_to_customer_and_variants() {
        let links = Links::new("https://shop.example.com");
        let bestellung = Bestellung::new(
            BestellungId(3),
            BestellungCreate {
                kunde_id: KundeId(1),
                posten: vec![PostenCreate {
                    produktdaten_id: ProduktdatenId(9),
                    anzahl: 2,
                }],
            },
        );

        let json = serde_json::to_value(links.bestellung_model(bestellung)).unwrap();
        assert_eq!(json["uri"], "https://shop.example.com/bestellungen/3");
        assert_eq!(json["kunde_uri"], "https://shop.example.com/kunden/1");
        assert_eq!(
            json["posten"][0]["produktdaten_uri"],
            "https://shop.example.com/produktdaten/9"
        );
        assert_eq!(json["posten"][0]["anzahl"], 2);
        assert_eq!(json["status"], "offen");
        assert_eq!(json["version"], 0);
    }
}
