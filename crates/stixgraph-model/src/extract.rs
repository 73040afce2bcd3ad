//! Graph contributions of a domain object
//!
//! Every domain object kind shares the same mapping into the graph: the
//! object node itself plus its eligible external references, and a fixed
//! ordering of outbound relations resolved against the batch's reference
//! index. Extraction for one object is all-or-nothing; a single unresolved
//! reference aborts it with no partial relation list.

use crate::common::HasProvenance;
use crate::index::ReferenceIndex;
use stixgraph_core::{Element, Error, Relation, RelationKind, Result, SourceAttribute};
use tracing::debug;

/// Graph mapping shared by every domain object kind
///
/// Both operations are pure functions of the object's current field values:
/// no state is retained between calls and the reference index is never
/// mutated, so independent objects may be extracted in parallel once the
/// index is frozen.
pub trait DomainObject: Element + HasProvenance {
    /// The graph elements this object contributes
    ///
    /// The object itself first, exactly once, followed by every eligible
    /// external reference in declaration order.
    fn contributed_elements(&self) -> Vec<&dyn Element>
    where
        Self: Sized,
    {
        let mut elements: Vec<&dyn Element> = vec![self];
        for reference in &self.common().external_references {
            if reference.is_eligible() {
                elements.push(reference);
            }
        }
        elements
    }

    /// The outbound relations this object contributes
    ///
    /// In fixed concatenation order: one `external_reference` relation per
    /// eligible external reference, then the `creator` relation when
    /// `created_by_ref` is non-empty, then one `marking` relation per
    /// `object_marking_refs` entry in wire order. Creator and marking
    /// targets are resolved through the index; a miss fails the whole
    /// extraction with the unresolved identifier and referencing attribute.
    fn extra_relations(&self, index: &ReferenceIndex) -> Result<Vec<Relation>>
    where
        Self: Sized,
    {
        let source = self.node_ref();
        let mut relations = Vec::new();

        for reference in &self.common().external_references {
            if reference.is_eligible() {
                relations.push(Relation::new(
                    source.clone(),
                    reference.node_ref(),
                    RelationKind::ExternalReference,
                    SourceAttribute::ExternalReferences,
                ));
            }
        }

        if let Some(creator) = &self.common().created_by_ref {
            if !creator.as_str().is_empty() {
                let target = index.lookup(creator).ok_or_else(|| {
                    Error::UnresolvedReference {
                        id: creator.clone(),
                        attribute: SourceAttribute::CreatedByRef,
                    }
                })?;
                relations.push(Relation::new(
                    source.clone(),
                    target.clone(),
                    RelationKind::Creator,
                    SourceAttribute::CreatedByRef,
                ));
            }
        }

        for marking in &self.common().object_marking_refs {
            let target = index.lookup(marking).ok_or_else(|| {
                Error::UnresolvedReference {
                    id: marking.clone(),
                    attribute: SourceAttribute::ObjectMarkingRefs,
                }
            })?;
            relations.push(Relation::new(
                source.clone(),
                target.clone(),
                RelationKind::Marking,
                SourceAttribute::ObjectMarkingRefs,
            ));
        }

        debug!("Extracted {} relations for {}", relations.len(), source.id);
        Ok(relations)
    }
}

impl<T: Element + HasProvenance> DomainObject for T {}
