use std::collections::{HashMap, HashSet};

use crate::error::{OperationError, Result, TopologyError};
use crate::topology::{EdgeId, OrientedEdge, TopologyStore, VertexId, WireData, WireId};

/// Assembles existing edges into a single wire.
///
/// The edges may be given in any order and orientation; they are chained
/// end to end and oriented along the chain. The wire is closed when the
/// chain returns to its first vertex.
pub struct MakeWire {
    edges: Vec<EdgeId>,
}

impl MakeWire {
    /// Creates a new `MakeWire` operation.
    #[must_use]
    pub fn new(edges: Vec<EdgeId>) -> Self {
        Self { edges }
    }

    /// Executes the operation, creating the wire in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if no edges are given, an edge is repeated or
    /// missing, a vertex joins more than two edges, or the edges do not
    /// form one connected path.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<WireId> {
        let chain = self.chain(store)?;
        let first = chain.first().copied();
        let last = chain.last().copied();

        let is_closed = match (first, last) {
            (Some(first), Some(last)) if chain.len() > 1 => {
                let head = store.edge(first.edge)?.first_vertex(first.forward);
                let tail = store.edge(last.edge)?.last_vertex(last.forward);
                head == tail
            }
            _ => false,
        };

        Ok(store.add_wire(WireData {
            edges: chain,
            is_closed,
        }))
    }

    /// Orders and orients the edges into one path without modifying the store.
    fn chain(&self, store: &TopologyStore) -> Result<Vec<OrientedEdge>> {
        if self.edges.is_empty() {
            return Err(OperationError::InvalidInput("a wire needs at least one edge".into()).into());
        }

        let mut seen = HashSet::new();
        let mut ends: Vec<(EdgeId, VertexId, VertexId)> = Vec::with_capacity(self.edges.len());
        for &edge_id in &self.edges {
            if !seen.insert(edge_id) {
                return Err(
                    TopologyError::InvalidTopology("edge repeated in wire".into()).into(),
                );
            }
            let edge = store.edge(edge_id)?;
            ends.push((edge_id, edge.start, edge.end));
        }

        let mut incident: HashMap<VertexId, Vec<usize>> = HashMap::new();
        for (i, &(_, start, end)) in ends.iter().enumerate() {
            incident.entry(start).or_default().push(i);
            incident.entry(end).or_default().push(i);
        }
        if incident.values().any(|uses| uses.len() > 2) {
            return Err(TopologyError::NonManifold(
                "a vertex joins more than two edges".into(),
            )
            .into());
        }

        // Open paths must start at a free end; loops start at the first edge.
        let (start_index, start_vertex) = ends
            .iter()
            .enumerate()
            .find_map(|(i, &(_, start, end))| {
                if incident[&start].len() == 1 {
                    Some((i, start))
                } else if incident[&end].len() == 1 {
                    Some((i, end))
                } else {
                    None
                }
            })
            .unwrap_or((0, ends[0].1));

        let mut used = vec![false; ends.len()];
        let mut chain = Vec::with_capacity(ends.len());
        let mut current = Some((start_index, start_vertex));

        while let Some((index, from)) = current {
            used[index] = true;
            let (edge_id, start, end) = ends[index];
            let forward = start == from;
            chain.push(OrientedEdge::new(edge_id, forward));

            let tail = if forward { end } else { start };
            current = incident[&tail]
                .iter()
                .copied()
                .find(|&next| !used[next])
                .map(|next| (next, tail));
        }

        if chain.len() != ends.len() {
            return Err(TopologyError::Disconnected.into());
        }
        Ok(chain)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakePolygon;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    fn square_edges(store: &mut TopologyStore) -> Vec<EdgeId> {
        let wire = MakePolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)], true)
            .execute(store)
            .unwrap();
        store.wire(wire).unwrap().edges.iter().map(|oe| oe.edge).collect()
    }

    #[test]
    fn shuffled_square_closes() {
        let mut store = TopologyStore::new();
        let e = square_edges(&mut store);
        let wire = MakeWire::new(vec![e[2], e[0], e[3], e[1]])
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert!(data.is_closed);
        assert_eq!(data.edges.len(), 4);
    }

    #[test]
    fn three_of_four_edges_form_an_open_chain() {
        let mut store = TopologyStore::new();
        let e = square_edges(&mut store);
        let wire = MakeWire::new(vec![e[0], e[1], e[3]])
            .execute(&mut store)
            .unwrap();
        let data = store.wire(wire).unwrap();
        assert!(!data.is_closed);
        // The chain starts at the first free end found: the far end of e[1].
        assert_eq!(data.edges[0].edge, e[1]);
        assert!(!data.edges[0].forward);
        assert_eq!(store.wire_points(wire).unwrap().len(), 4);
    }

    #[test]
    fn reversed_edge_is_oriented_along_the_chain() {
        let mut store = TopologyStore::new();
        let a = MakePolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let a_edge = store.wire(a).unwrap().edges[0].edge;
        let a_end = store.edge(a_edge).unwrap().end;
        // second edge runs backwards into a's end vertex
        let far = store.add_vertex(crate::topology::VertexData::new(p(2.0, 0.0)));
        let b_edge = store.add_edge(crate::topology::EdgeData {
            start: far,
            end: a_end,
            curve: crate::geometry::Line::from_points(p(2.0, 0.0), p(1.0, 0.0)).unwrap(),
        });
        let wire = MakeWire::new(vec![a_edge, b_edge]).execute(&mut store).unwrap();
        let data = store.wire(wire).unwrap();
        assert!(data.edges[0].forward);
        assert!(!data.edges[1].forward);
        assert!(!data.is_closed);
    }

    #[test]
    fn disjoint_edges_fail() {
        let mut store = TopologyStore::new();
        let a = MakePolygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let b = MakePolygon::new(vec![p(5.0, 0.0), p(6.0, 0.0)], false)
            .execute(&mut store)
            .unwrap();
        let edges = vec![
            store.wire(a).unwrap().edges[0].edge,
            store.wire(b).unwrap().edges[0].edge,
        ];
        let result = MakeWire::new(edges).execute(&mut store);
        assert!(matches!(
            result,
            Err(crate::error::BrepEditError::Topology(TopologyError::Disconnected))
        ));
    }

    #[test]
    fn empty_and_repeated_edges_fail() {
        let mut store = TopologyStore::new();
        assert!(MakeWire::new(vec![]).execute(&mut store).is_err());
        let e = square_edges(&mut store);
        assert!(MakeWire::new(vec![e[0], e[0]]).execute(&mut store).is_err());
    }
}
