//! Unit tests for cab-grid.

#[cfg(test)]
mod helpers {
    use crate::Topology;

    /// Bounds-checked construction helper; all tests use positive dims.
    pub fn topo(rows: i32, cols: i32) -> Topology {
        Topology::new(rows, cols).unwrap()
    }
}

// ── Boundary and adjacency ────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use cab_core::GridPoint;

    use super::helpers::topo;
    use crate::{GridError, Topology};

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            Topology::new(0, 10),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Topology::new(10, -1),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn is_valid_boundary_closure() {
        let t = topo(3, 4);
        assert!(t.is_valid(GridPoint::new(0, 0)));
        assert!(t.is_valid(GridPoint::new(2, 3)));
        assert!(!t.is_valid(GridPoint::new(3, 0)));
        assert!(!t.is_valid(GridPoint::new(0, 4)));
        assert!(!t.is_valid(GridPoint::new(-1, 0)));
        assert!(!t.is_valid(GridPoint::new(0, -1)));
    }

    #[test]
    fn adjacency_is_manhattan_one() {
        let t = topo(3, 3);
        let center = GridPoint::new(1, 1);
        assert!(t.is_adjacent(center, GridPoint::new(0, 1)).unwrap());
        assert!(t.is_adjacent(center, GridPoint::new(2, 1)).unwrap());
        assert!(t.is_adjacent(center, GridPoint::new(1, 0)).unwrap());
        assert!(t.is_adjacent(center, GridPoint::new(1, 2)).unwrap());
        // Diagonal and distant cells are not adjacent.
        assert!(!t.is_adjacent(center, GridPoint::new(0, 0)).unwrap());
        assert!(!t.is_adjacent(center, GridPoint::new(1, 1)).unwrap());
    }

    #[test]
    fn adjacency_query_requires_bounds() {
        let t = topo(3, 3);
        let inside = GridPoint::new(1, 1);
        let outside = GridPoint::new(3, 1);
        assert!(matches!(
            t.is_adjacent(inside, outside),
            Err(GridError::OutOfBounds(p)) if p == outside
        ));
        assert!(matches!(
            t.is_adjacent(outside, inside),
            Err(GridError::OutOfBounds(_))
        ));
    }

    #[test]
    fn cell_count() {
        assert_eq!(topo(3, 4).cell_count(), 12);
    }
}

// ── Cost table ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod costs {
    use cab_core::{GridPoint, SimRng};

    use super::helpers::topo;
    use crate::GridError;

    #[test]
    fn uninitialized_cost_query_is_a_contract_violation() {
        let t = topo(3, 3);
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(0, 1);
        assert!(matches!(
            t.edge_cost(a, b),
            Err(GridError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn random_costs_are_symmetric_and_in_range() {
        let mut t = topo(4, 5);
        t.init_random_costs(&mut SimRng::new(7));

        for row in 0..4 {
            for col in 0..5 {
                let p = GridPoint::new(row, col);
                for n in p.neighbors() {
                    if !t.is_valid(n) {
                        continue;
                    }
                    let forward = t.edge_cost(p, n).unwrap();
                    let reverse = t.edge_cost(n, p).unwrap();
                    assert_eq!(forward, reverse, "cost({p}, {n}) not symmetric");
                    assert!(forward <= 9, "cost({p}, {n}) = {forward} out of range");
                }
            }
        }
    }

    #[test]
    fn random_costs_cover_every_edge_exactly_once() {
        let mut t = topo(4, 5);
        t.init_random_costs(&mut SimRng::new(0));
        // Undirected edges on an R×C grid: R*(C-1) horizontal + (R-1)*C
        // vertical; the table stores both orderings of each.
        let edges = 4 * 4 + 3 * 5;
        assert_eq!(t.cost_entry_count(), 2 * edges);
    }

    #[test]
    fn random_costs_deterministic_for_a_seed() {
        let mut t1 = topo(6, 6);
        let mut t2 = topo(6, 6);
        t1.init_random_costs(&mut SimRng::new(99));
        t2.init_random_costs(&mut SimRng::new(99));

        for row in 0..6 {
            for col in 0..6 {
                let p = GridPoint::new(row, col);
                for n in p.neighbors() {
                    if !t1.is_valid(n) {
                        continue;
                    }
                    assert_eq!(t1.edge_cost(p, n).unwrap(), t2.edge_cost(p, n).unwrap());
                }
            }
        }
    }

    #[test]
    fn zero_costs_write_all_four_directions() {
        let mut t = topo(3, 3);
        t.init_zero_costs();

        let center = GridPoint::new(1, 1);
        for n in center.neighbors() {
            assert_eq!(t.edge_cost(center, n).unwrap(), 0);
            assert_eq!(t.edge_cost(n, center).unwrap(), 0);
        }
        assert_eq!(t.cost_entry_count(), 2 * (3 * 2 + 2 * 3));
    }

    #[test]
    fn zero_costs_overwrite_random_costs() {
        let mut t = topo(3, 3);
        t.init_random_costs(&mut SimRng::new(1));
        t.init_zero_costs();

        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(0, 1);
        assert_eq!(t.edge_cost(a, b).unwrap(), 0);
        assert_eq!(t.edge_cost(b, a).unwrap(), 0);
    }
}

// ── Greedy planner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use cab_core::GridPoint;

    use super::helpers::topo;
    use crate::{GreedyPlanner, GridError, PathPlanner};

    #[test]
    fn same_start_and_end_is_empty() {
        let t = topo(5, 5);
        let p = GridPoint::new(2, 2);
        assert!(GreedyPlanner.plan(&t, p, p).unwrap().is_empty());
    }

    #[test]
    fn path_length_equals_manhattan_distance() {
        let t = topo(10, 10);
        for (start, end) in [
            (GridPoint::new(0, 0), GridPoint::new(9, 9)),
            (GridPoint::new(9, 0), GridPoint::new(0, 9)),
            (GridPoint::new(3, 7), GridPoint::new(3, 1)),
            (GridPoint::new(8, 2), GridPoint::new(1, 2)),
        ] {
            let path = GreedyPlanner.plan(&t, start, end).unwrap();
            assert_eq!(path.len() as u32, start.manhattan_distance(end));
            assert_eq!(*path.last().unwrap(), end);
        }
    }

    #[test]
    fn consecutive_steps_are_adjacent() {
        let t = topo(10, 10);
        let start = GridPoint::new(1, 8);
        let end = GridPoint::new(7, 2);
        let path = GreedyPlanner.plan(&t, start, end).unwrap();

        let mut prev = start;
        for &step in &path {
            assert_eq!(prev.manhattan_distance(step), 1, "{prev} -> {step}");
            prev = step;
        }
        assert_eq!(prev, end);
    }

    #[test]
    fn ties_break_in_scan_order() {
        let t = topo(5, 5);
        // Up (row+1) is scanned before right (col+1): with both improving
        // equally, the walk climbs rows first, then moves along the columns.
        let path = GreedyPlanner
            .plan(&t, GridPoint::new(0, 0), GridPoint::new(2, 2))
            .unwrap();
        assert_eq!(
            path,
            vec![
                GridPoint::new(1, 0),
                GridPoint::new(2, 0),
                GridPoint::new(2, 1),
                GridPoint::new(2, 2),
            ]
        );

        // Down (row-1) is scanned before left: descending walks drop rows first.
        let path = GreedyPlanner
            .plan(&t, GridPoint::new(2, 2), GridPoint::new(0, 0))
            .unwrap();
        assert_eq!(
            path,
            vec![
                GridPoint::new(1, 2),
                GridPoint::new(0, 2),
                GridPoint::new(0, 1),
                GridPoint::new(0, 0),
            ]
        );
    }

    #[test]
    fn straight_line_along_a_row() {
        let t = topo(3, 5);
        let path = GreedyPlanner
            .plan(&t, GridPoint::new(0, 0), GridPoint::new(0, 3))
            .unwrap();
        assert_eq!(
            path,
            vec![
                GridPoint::new(0, 1),
                GridPoint::new(0, 2),
                GridPoint::new(0, 3),
            ]
        );
    }

    #[test]
    fn ignores_edge_weights() {
        // The planner never reads the cost table — planning on a topology
        // with no initialized costs must succeed.
        let t = topo(4, 4);
        let path = GreedyPlanner
            .plan(&t, GridPoint::new(0, 0), GridPoint::new(3, 3))
            .unwrap();
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn out_of_bounds_endpoints_rejected() {
        let t = topo(3, 3);
        let inside = GridPoint::new(1, 1);
        let outside = GridPoint::new(5, 5);
        assert!(matches!(
            GreedyPlanner.plan(&t, outside, inside),
            Err(GridError::OutOfBounds(_))
        ));
        assert!(matches!(
            GreedyPlanner.plan(&t, inside, outside),
            Err(GridError::OutOfBounds(_))
        ));
    }
}
