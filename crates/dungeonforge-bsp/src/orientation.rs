use crate::error::BspError;
use crate::tile::{TileGrid, TileLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Void,
    Ground,
    Wall,
}

fn family(label: TileLabel) -> Family {
    match label.id() {
        0 => Family::Void,
        1 => Family::Ground,
        _ => Family::Wall,
    }
}

/// A 3x3 neighbourhood of tile families, center always [`Family::Wall`].
#[derive(Debug, Clone, Copy)]
struct Neighbourhood {
    nw: Family,
    n: Family,
    ne: Family,
    w: Family,
    e: Family,
    sw: Family,
    s: Family,
    se: Family,
}

/// Refines every interior [`TileLabel::RawWall`] cell of `grid` into its
/// oriented variant, by matching its 3x3 neighbourhood against a fixed
/// table of patterns, first match wins. Border cells (row/column 0 or the
/// last row/column) are left untouched, since they have no full
/// neighbourhood.
pub(crate) fn apply(grid: &TileGrid) -> Result<TileGrid, BspError> {
    let mut out = grid.clone();
    let (width, height) = (grid.width(), grid.height());

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            if grid.get(x, y) != TileLabel::RawWall {
                continue;
            }
            let n = Neighbourhood {
                nw: family(grid.get(x - 1, y - 1)),
                n: family(grid.get(x, y - 1)),
                ne: family(grid.get(x + 1, y - 1)),
                w: family(grid.get(x - 1, y)),
                e: family(grid.get(x + 1, y)),
                sw: family(grid.get(x - 1, y + 1)),
                s: family(grid.get(x, y + 1)),
                se: family(grid.get(x + 1, y + 1)),
            };
            out.set(x, y, classify(n)?);
        }
    }

    Ok(out)
}

/// Classifies a single 3x3 neighbourhood whose center is known to be a
/// raw wall. Exposed for targeted unit testing of the pattern table.
fn classify(n: Neighbourhood) -> Result<TileLabel, BspError> {
    use Family::{Ground as G, Void as V, Wall as W};

    if n.n == W && n.s == G {
        return Ok(TileLabel::WallBase);
    }
    if n.n == V && n.w == W && n.e == W && n.s == W {
        return Ok(TileLabel::WallN);
    }
    if n.n == G && n.s == V {
        return Ok(TileLabel::WallS);
    }
    if n.n == W && n.w == V && n.s == W {
        return Ok(TileLabel::WallW);
    }
    if n.n == W && n.e == V && n.s == W {
        return Ok(TileLabel::WallE);
    }
    if n.nw == V && n.n == V && n.w == V {
        return Ok(TileLabel::WallNw);
    }
    if n.n == V && n.ne == V && n.e == V {
        return Ok(TileLabel::WallNe);
    }
    if n.e == V && n.s == V && n.se == V {
        return Ok(TileLabel::WallSe);
    }
    if n.w == V && n.s == V && n.sw == V {
        return Ok(TileLabel::WallSw);
    }
    if n.nw == V && n.n == W && n.w == W {
        return Ok(TileLabel::WallNwInt);
    }
    if n.n == W && n.ne == V && n.e == W {
        return Ok(TileLabel::WallNeInt);
    }
    if n.e == W && n.s == W && n.se == V {
        return Ok(TileLabel::WallSeInt);
    }
    if n.w == W && n.s == W && n.sw == V {
        return Ok(TileLabel::WallSwInt);
    }

    Ok(TileLabel::RawWall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Family::{Ground as G, Void as V, Wall as W};

    fn patch(nw: Family, n: Family, ne: Family, w: Family, e: Family, sw: Family, s: Family, se: Family) -> Neighbourhood {
        Neighbourhood { nw, n, ne, w, e, sw, s, se }
    }

    #[test]
    fn base_wall_faces_ground() {
        let n = patch(V, W, V, V, V, V, G, V);
        assert_eq!(classify(n).unwrap(), TileLabel::WallBase);
    }

    #[test]
    fn outer_nw_corner() {
        let n = patch(V, V, V, V, V, V, V, V);
        assert_eq!(classify(n).unwrap(), TileLabel::WallNw);
    }

    #[test]
    fn inner_se_corner_takes_priority_correctly() {
        let n = patch(V, V, V, V, W, V, W, V);
        assert_eq!(classify(n).unwrap(), TileLabel::WallSeInt);
    }

    #[test]
    fn unrecognised_pattern_stays_raw() {
        let n = patch(G, G, G, G, G, G, G, G);
        assert_eq!(classify(n).unwrap(), TileLabel::RawWall);
    }
}
