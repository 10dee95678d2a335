//! Blocked matrix addressing walkthrough.
//!
//! This example builds the tiled index space of a square matrix split into
//! square blocks, the shape a distributed dense matrix product works over,
//! and exercises the full query surface:
//! - uniform blocking construction
//! - tile and element counts
//! - ordinal computation and element-to-tile lookup
//! - per-tile element bounds and iteration
//! - axis permutation (transposition)
//!
//! Run with:
//! ```bash
//! cargo run --example blocked_matrix
//! ```

use tilrso_range::{AxisRange, DimOrder, ElementIndex, Permutation, TiledRange};

fn main() -> anyhow::Result<()> {
    let matrix_size = 16;
    let block_size = 4;

    println!("=== tilrso-range: Blocked Matrix Addressing ===\n");
    println!("Matrix size = {0}x{0}", matrix_size);
    println!("Block size  = {0}x{0}", block_size);

    // One axis range per dimension, blocked uniformly
    let axis = AxisRange::uniform(matrix_size, block_size)?;
    let range = TiledRange::new(vec![axis.clone(), axis], DimOrder::RowMajor)?;

    println!("\n{}", range);
    println!("Tiles per axis: {}", range.axis(0).unwrap().ntiles());

    // Walk the tiles in traversal order
    println!("\n--- Tiles in row-major order ---");
    for t in range.tiles() {
        let ordinal = range.tile_ordinal(&t)?;
        let bounds = range.tile_bounds(&t)?;
        println!(
            "tile {} ordinal {:2} elements {}..{}",
            t,
            ordinal,
            bounds.start(),
            bounds.finish()
        );
    }

    // Locate the tile owning an element
    let probe = ElementIndex::from([9, 2]);
    let owner = range.find(&probe).expect("element lies in the range");
    println!("\nElement {} belongs to tile {}", probe, owner);

    // Iterate the elements of that one tile
    let bounds = range.tile_bounds(&owner)?;
    let first: Vec<_> = bounds.elements().take(3).collect();
    println!(
        "First elements of {}: {}, {}, {}",
        bounds, first[0], first[1], first[2]
    );

    // Transpose the index space
    let transpose = Permutation::new([1, 0])?;
    let transposed = range.permute(&transpose)?;
    println!("\nTransposed: {}", transposed);
    println!(
        "Round trip restores the original: {}",
        transposed.permute(&transpose.inverse())? == range
    );

    Ok(())
}
