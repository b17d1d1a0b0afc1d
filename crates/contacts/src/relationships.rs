//! The symmetric relationship graph between contacts.
//!
//! Every logical relationship is materialized as a reciprocal pair of
//! directed edges: "A is parent of B" always coexists with "B is child of
//! A". Which type pairs with which is a static table validated when it is
//! built.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::models::ContactId;

/// Identifier for a relationship type in the reciprocal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelationshipTypeId(pub u16);

impl std::fmt::Display for RelationshipTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the reciprocal type table.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipType {
    pub id: RelationshipTypeId,
    pub name: &'static str,
    /// The type implied on the other side of the edge. Symmetric types
    /// (spouse, friend) point at themselves.
    pub reciprocal: RelationshipTypeId,
}

/// Well-known relationship type ids from the default table.
pub mod builtin_types {
    use super::RelationshipTypeId;

    pub const SIGNIFICANT_OTHER: RelationshipTypeId = RelationshipTypeId(1);
    pub const SPOUSE: RelationshipTypeId = RelationshipTypeId(2);
    pub const EX_PARTNER: RelationshipTypeId = RelationshipTypeId(3);
    pub const PARENT: RelationshipTypeId = RelationshipTypeId(4);
    pub const CHILD: RelationshipTypeId = RelationshipTypeId(5);
    pub const SIBLING: RelationshipTypeId = RelationshipTypeId(6);
    pub const GRANDPARENT: RelationshipTypeId = RelationshipTypeId(7);
    pub const GRANDCHILD: RelationshipTypeId = RelationshipTypeId(8);
    pub const UNCLE: RelationshipTypeId = RelationshipTypeId(9);
    pub const NEPHEW: RelationshipTypeId = RelationshipTypeId(10);
    pub const COUSIN: RelationshipTypeId = RelationshipTypeId(11);
    pub const GODPARENT: RelationshipTypeId = RelationshipTypeId(12);
    pub const GODCHILD: RelationshipTypeId = RelationshipTypeId(13);
    pub const FRIEND: RelationshipTypeId = RelationshipTypeId(14);
    pub const BEST_FRIEND: RelationshipTypeId = RelationshipTypeId(15);
    pub const COLLEAGUE: RelationshipTypeId = RelationshipTypeId(16);
    pub const BOSS: RelationshipTypeId = RelationshipTypeId(17);
    pub const SUBORDINATE: RelationshipTypeId = RelationshipTypeId(18);
    pub const MENTOR: RelationshipTypeId = RelationshipTypeId(19);
    pub const PROTEGE: RelationshipTypeId = RelationshipTypeId(20);
}

/// Static lookup table from a relationship type to its reciprocal.
///
/// Validated on construction: ids are unique, every reciprocal resolves,
/// and reciprocity is an involution (the reciprocal's reciprocal is the
/// original type).
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipTypeTable {
    types: Vec<RelationshipType>,
}

impl RelationshipTypeTable {
    pub fn new(types: Vec<RelationshipType>) -> Result<Self, Error> {
        let table = Self { types };
        table.validate()?;
        Ok(table)
    }

    /// The default table, mirroring a typical relationship manager's seeded
    /// types.
    pub fn with_default_types() -> Self {
        use builtin_types::*;

        let pair = |id, name, reciprocal| RelationshipType {
            id,
            name,
            reciprocal,
        };

        Self::new(vec![
            pair(SIGNIFICANT_OTHER, "significant other", SIGNIFICANT_OTHER),
            pair(SPOUSE, "spouse", SPOUSE),
            pair(EX_PARTNER, "ex-partner", EX_PARTNER),
            pair(PARENT, "parent", CHILD),
            pair(CHILD, "child", PARENT),
            pair(SIBLING, "sibling", SIBLING),
            pair(GRANDPARENT, "grandparent", GRANDCHILD),
            pair(GRANDCHILD, "grandchild", GRANDPARENT),
            pair(UNCLE, "uncle/aunt", NEPHEW),
            pair(NEPHEW, "nephew/niece", UNCLE),
            pair(COUSIN, "cousin", COUSIN),
            pair(GODPARENT, "godparent", GODCHILD),
            pair(GODCHILD, "godchild", GODPARENT),
            pair(FRIEND, "friend", FRIEND),
            pair(BEST_FRIEND, "best friend", BEST_FRIEND),
            pair(COLLEAGUE, "colleague", COLLEAGUE),
            pair(BOSS, "boss", SUBORDINATE),
            pair(SUBORDINATE, "subordinate", BOSS),
            pair(MENTOR, "mentor", PROTEGE),
            pair(PROTEGE, "protege", MENTOR),
        ])
        .expect("default relationship type table is well-formed")
    }

    fn validate(&self) -> Result<(), Error> {
        let mut seen = std::collections::HashSet::new();
        for t in &self.types {
            if !seen.insert(t.id) {
                return Err(Error::InvalidTypeTable("duplicate relationship type id"));
            }
        }
        for t in &self.types {
            let reciprocal = self
                .get(t.reciprocal)
                .ok_or(Error::InvalidTypeTable("reciprocal type does not exist"))?;
            if reciprocal.reciprocal != t.id {
                return Err(Error::InvalidTypeTable(
                    "reciprocal mapping is not an involution",
                ));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: RelationshipTypeId) -> Option<&RelationshipType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// The paired type for `id`, or `UnknownRelationshipType`.
    pub fn reciprocal_of(&self, id: RelationshipTypeId) -> Result<RelationshipTypeId, Error> {
        self.get(id)
            .map(|t| t.reciprocal)
            .ok_or(Error::UnknownRelationshipType(id))
    }

    /// Picks a random type id, for fixture generation.
    pub fn random_type(&self, rng: &mut impl Rng) -> RelationshipTypeId {
        self.types[rng.gen_range(0..self.types.len())].id
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelationshipType> {
        self.types.iter()
    }
}

impl Default for RelationshipTypeTable {
    fn default() -> Self {
        Self::with_default_types()
    }
}

/// A directed edge: `contact_a` is `type_id` of `contact_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub contact_a: ContactId,
    pub contact_b: ContactId,
    pub type_id: RelationshipTypeId,
}

/// Undirected typed relationships between contacts, stored as reciprocal
/// edge pairs.
///
/// The graph is scoped to a single account and assumes a single writer per
/// account: two simultaneous writers could race on the replace-then-insert
/// upsert of a pair, and nothing here guards against that. Callers must
/// serialize access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipGraph {
    edges: Vec<Relationship>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links two contacts, inserting the forward edge and its reciprocal as
    /// one unit. An existing pair between the two contacts is replaced, not
    /// duplicated.
    pub fn set_relationship(
        &mut self,
        contact_a: ContactId,
        contact_b: ContactId,
        type_id: RelationshipTypeId,
        table: &RelationshipTypeTable,
    ) -> Result<(Relationship, Relationship), Error> {
        if contact_a == contact_b {
            return Err(Error::SelfRelationship);
        }
        let reciprocal = table.reciprocal_of(type_id)?;

        self.remove_relationship(contact_a, contact_b);

        let forward = Relationship {
            contact_a,
            contact_b,
            type_id,
        };
        let backward = Relationship {
            contact_a: contact_b,
            contact_b: contact_a,
            type_id: reciprocal,
        };
        self.edges.push(forward.clone());
        self.edges.push(backward.clone());

        Ok((forward, backward))
    }

    /// Removes the relationship between two contacts; both directed edges go
    /// together. Returns whether anything was removed.
    pub fn remove_relationship(&mut self, contact_a: ContactId, contact_b: ContactId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| {
            !((e.contact_a == contact_a && e.contact_b == contact_b)
                || (e.contact_a == contact_b && e.contact_b == contact_a))
        });
        self.edges.len() != before
    }

    /// Outgoing edges of a contact ("`contact` is X of ...").
    pub fn relationships_of(
        &self,
        contact: ContactId,
    ) -> impl Iterator<Item = &Relationship> + '_ {
        self.edges.iter().filter(move |e| e.contact_a == contact)
    }

    /// Drops every pair touching the contact. Used when a contact is
    /// deleted.
    pub fn remove_contact(&mut self, contact: ContactId) {
        self.edges
            .retain(|e| e.contact_a != contact && e.contact_b != contact);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::builtin_types::*;
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = RelationshipTypeTable::with_default_types();
        for t in table.iter() {
            let back = table.reciprocal_of(t.reciprocal).unwrap();
            assert_eq!(back, t.id, "reciprocal of {} must map back", t.name);
        }
    }

    #[test]
    fn test_table_rejects_dangling_reciprocal() {
        let result = RelationshipTypeTable::new(vec![RelationshipType {
            id: RelationshipTypeId(1),
            name: "parent",
            reciprocal: RelationshipTypeId(99),
        }]);
        assert!(matches!(result, Err(Error::InvalidTypeTable(_))));
    }

    #[test]
    fn test_table_rejects_non_involution() {
        let result = RelationshipTypeTable::new(vec![
            RelationshipType {
                id: RelationshipTypeId(1),
                name: "parent",
                reciprocal: RelationshipTypeId(2),
            },
            RelationshipType {
                id: RelationshipTypeId(2),
                name: "child",
                reciprocal: RelationshipTypeId(2),
            },
        ]);
        assert!(matches!(result, Err(Error::InvalidTypeTable(_))));
    }

    #[test]
    fn test_reciprocal_edge_is_materialized() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let (c1, c2) = (ContactId::new(), ContactId::new());

        graph.set_relationship(c1, c2, PARENT, &table).unwrap();

        let of_c2: Vec<_> = graph.relationships_of(c2).collect();
        assert_eq!(of_c2.len(), 1);
        assert_eq!(of_c2[0].type_id, CHILD);
        assert_eq!(of_c2[0].contact_b, c1);
    }

    #[test]
    fn test_upsert_replaces_existing_pair() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let (c1, c2) = (ContactId::new(), ContactId::new());

        graph.set_relationship(c1, c2, FRIEND, &table).unwrap();
        graph.set_relationship(c1, c2, SPOUSE, &table).unwrap();

        assert_eq!(graph.edge_count(), 2);
        let of_c1: Vec<_> = graph.relationships_of(c1).collect();
        assert_eq!(of_c1.len(), 1);
        assert_eq!(of_c1[0].type_id, SPOUSE);
    }

    #[test]
    fn test_removal_removes_both_edges() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let (c1, c2) = (ContactId::new(), ContactId::new());

        graph.set_relationship(c1, c2, BOSS, &table).unwrap();
        assert!(graph.remove_relationship(c2, c1));

        assert!(graph.is_empty());
        assert!(!graph.remove_relationship(c1, c2));
    }

    #[test]
    fn test_self_relationship_is_rejected() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let c1 = ContactId::new();

        let result = graph.set_relationship(c1, c1, FRIEND, &table);
        assert!(matches!(result, Err(Error::SelfRelationship)));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let (c1, c2) = (ContactId::new(), ContactId::new());

        let result = graph.set_relationship(c1, c2, RelationshipTypeId(999), &table);
        assert!(matches!(result, Err(Error::UnknownRelationshipType(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_remove_contact_drops_all_pairs() {
        let table = RelationshipTypeTable::with_default_types();
        let mut graph = RelationshipGraph::new();
        let (c1, c2, c3) = (ContactId::new(), ContactId::new(), ContactId::new());

        graph.set_relationship(c1, c2, PARENT, &table).unwrap();
        graph.set_relationship(c1, c3, COLLEAGUE, &table).unwrap();
        graph.set_relationship(c2, c3, FRIEND, &table).unwrap();

        graph.remove_contact(c1);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.relationships_of(c1).count(), 0);
        assert_eq!(graph.relationships_of(c2).count(), 1);
    }
}
