//! Property-based tests for the tiled range engine
//!
//! This module uses proptest to verify the addressing invariants across
//! randomly generated boundary lists, ranks, and traversal orders.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{AxisRange, DimOrder, ElementIndex, Permutation, TileIndex, TiledRange};

    // Strategy for one strictly increasing boundary list (1-3 tiles of 1-3
    // elements, possibly starting above zero)
    fn boundaries_strategy() -> impl Strategy<Value = Vec<usize>> {
        (0usize..3, prop::collection::vec(1usize..4, 1..4)).prop_map(|(start, extents)| {
            let mut boundaries = vec![start];
            for extent in extents {
                boundaries.push(boundaries[boundaries.len() - 1] + extent);
            }
            boundaries
        })
    }

    // Strategy for 1-3 axes worth of boundary lists
    fn axes_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
        prop::collection::vec(boundaries_strategy(), 1..=3)
    }

    fn order_strategy() -> impl Strategy<Value = DimOrder> {
        prop_oneof![Just(DimOrder::RowMajor), Just(DimOrder::ColumnMajor)]
    }

    fn build_range(boundary_lists: &[Vec<usize>], order: DimOrder) -> TiledRange {
        let axes: Vec<AxisRange> = boundary_lists
            .iter()
            .map(|b| AxisRange::new(b.clone()).unwrap())
            .collect();
        TiledRange::new(axes, order).unwrap()
    }

    #[test]
    fn test_proptest_smoke() {
        let range = build_range(&[vec![0, 2, 4], vec![0, 2, 4]], DimOrder::RowMajor);
        assert_eq!(range.ntiles(), 4);
    }

    proptest! {
        #[test]
        fn prop_tile_ordinals_are_a_bijection(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let mut ordinals: Vec<usize> = range
                .tiles()
                .map(|t| range.tile_ordinal(&t).unwrap())
                .collect();
            ordinals.sort_unstable();
            prop_assert_eq!(ordinals, (0..range.ntiles()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_element_ordinals_are_a_bijection(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let mut ordinals: Vec<usize> = range
                .elements()
                .map(|e| range.element_ordinal(&e).unwrap())
                .collect();
            ordinals.sort_unstable();
            prop_assert_eq!(ordinals, (0..range.nelems()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_tile_iteration_is_complete_and_distinct(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let visited: Vec<TileIndex> = range.tiles().collect();
            prop_assert_eq!(visited.len(), range.ntiles());

            let distinct: HashSet<&TileIndex> = visited.iter().collect();
            prop_assert_eq!(distinct.len(), visited.len());

            for t in &visited {
                prop_assert!(range.includes_tile(t));
            }
        }

        #[test]
        fn prop_ordinals_follow_traversal_order(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let ordinals: Vec<usize> = range
                .tiles()
                .map(|t| range.tile_ordinal(&t).unwrap())
                .collect();
            prop_assert_eq!(ordinals, (0..range.ntiles()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_permutation_round_trip(
            (boundary_lists, image) in axes_strategy().prop_flat_map(|axes| {
                let rank = axes.len();
                (Just(axes), Just((0..rank).collect::<Vec<usize>>()).prop_shuffle())
            }),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let perm = Permutation::new(image).unwrap();
            let round_trip = range
                .permute(&perm)
                .unwrap()
                .permute(&perm.inverse())
                .unwrap();
            prop_assert_eq!(round_trip, range);
        }

        #[test]
        fn prop_includes_matches_ordinal_success(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
            probe in prop::collection::vec(0usize..12, 1..=3),
        ) {
            let range = build_range(&boundary_lists, order);

            let tile = TileIndex::new(probe.iter().copied());
            prop_assert_eq!(range.includes_tile(&tile), range.tile_ordinal(&tile).is_ok());

            let element = ElementIndex::new(probe.iter().copied());
            prop_assert_eq!(
                range.includes_element(&element),
                range.element_ordinal(&element).is_ok()
            );
        }

        #[test]
        fn prop_find_returns_the_covering_tile(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            for e in range.elements() {
                let t = range.find(&e).unwrap();
                let bounds = range.tile_bounds(&t).unwrap();
                for d in 0..range.rank() {
                    prop_assert!(bounds.start()[d] <= e[d]);
                    prop_assert!(e[d] < bounds.finish()[d]);
                }
            }
        }

        #[test]
        fn prop_tile_volumes_partition_the_elements(
            boundary_lists in axes_strategy(),
            order in order_strategy(),
        ) {
            let range = build_range(&boundary_lists, order);
            let total: usize = range
                .tiles()
                .map(|t| range.tile_volume(&t).unwrap())
                .sum();
            prop_assert_eq!(total, range.nelems());
        }
    }
}
