//! Concrete domain object variants
//!
//! Each kind is its own struct embedding [`CommonProperties`]; the [`Sdo`]
//! enum unites them and dispatches on the wire `type` tag.

use crate::common::{CommonProperties, HasProvenance};
use serde::{Deserialize, Serialize};
use stixgraph_core::{Element, StixId, Timestamp};

macro_rules! impl_domain_object {
    ($ty:ident, $entity:literal) => {
        impl Element for $ty {
            fn id(&self) -> StixId {
                self.id.clone()
            }

            fn entity(&self) -> &'static str {
                $entity
            }
        }

        impl HasProvenance for $ty {
            fn common(&self) -> &CommonProperties {
                &self.common
            }
        }
    };
}

/// A tactic or technique an adversary uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPattern {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(AttackPattern, "attack-pattern");

/// An individual, organization or group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Kind of identity (e.g. `organization`, `individual`)
    #[serde(default)]
    pub identity_class: Option<String>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(Identity, "identity");

/// A detection pattern for suspicious or malicious activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Detection pattern text
    #[serde(default)]
    pub pattern: Option<String>,

    /// When the pattern starts being valid
    #[serde(default)]
    pub valid_from: Option<Timestamp>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(Indicator, "indicator");

/// A grouped set of adversarial behaviors and resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntrusionSet {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Alternative names
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(IntrusionSet, "intrusion-set");

/// A malicious program or family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Malware {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(Malware, "malware");

/// A collection of threat intelligence on one or more topics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Stable textual identifier
    pub id: StixId,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Publication timestamp, raw as received
    #[serde(default)]
    pub published: Option<Timestamp>,

    /// Shared provenance fields
    #[serde(flatten)]
    pub common: CommonProperties,
}

impl_domain_object!(Report, "report");

/// A domain object of any supported kind, tagged by its wire `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Sdo {
    #[serde(rename = "attack-pattern")]
    AttackPattern(AttackPattern),

    #[serde(rename = "identity")]
    Identity(Identity),

    #[serde(rename = "indicator")]
    Indicator(Indicator),

    #[serde(rename = "intrusion-set")]
    IntrusionSet(IntrusionSet),

    #[serde(rename = "malware")]
    Malware(Malware),

    #[serde(rename = "report")]
    Report(Report),
}

impl Element for Sdo {
    fn id(&self) -> StixId {
        match self {
            Sdo::AttackPattern(object) => object.id(),
            Sdo::Identity(object) => object.id(),
            Sdo::Indicator(object) => object.id(),
            Sdo::IntrusionSet(object) => object.id(),
            Sdo::Malware(object) => object.id(),
            Sdo::Report(object) => object.id(),
        }
    }

    fn entity(&self) -> &'static str {
        match self {
            Sdo::AttackPattern(object) => object.entity(),
            Sdo::Identity(object) => object.entity(),
            Sdo::Indicator(object) => object.entity(),
            Sdo::IntrusionSet(object) => object.entity(),
            Sdo::Malware(object) => object.entity(),
            Sdo::Report(object) => object.entity(),
        }
    }
}

impl HasProvenance for Sdo {
    fn common(&self) -> &CommonProperties {
        match self {
            Sdo::AttackPattern(object) => object.common(),
            Sdo::Identity(object) => object.common(),
            Sdo::Indicator(object) => object.common(),
            Sdo::IntrusionSet(object) => object.common(),
            Sdo::Malware(object) => object.common(),
            Sdo::Report(object) => object.common(),
        }
    }
}
