//! Hexagonal and triangular cells laid onto a square array
//!
//! Hex layout: odd columns sit half a cell lower than even columns, and `y`
//! grows downward. Parity is taken with `x & 1` so negative columns alternate
//! the same way positive ones do.

use glam::IVec2;

#[inline]
fn is_even_column(x: i32) -> bool {
    x & 1 == 0
}

pub fn upper_left(p: IVec2) -> IVec2 {
    IVec2::new(p.x - 1, if is_even_column(p.x) { p.y - 1 } else { p.y })
}

pub fn upper_right(p: IVec2) -> IVec2 {
    IVec2::new(p.x + 1, if is_even_column(p.x) { p.y - 1 } else { p.y })
}

pub fn lower_left(p: IVec2) -> IVec2 {
    IVec2::new(p.x - 1, if is_even_column(p.x) { p.y } else { p.y + 1 })
}

pub fn lower_right(p: IVec2) -> IVec2 {
    IVec2::new(p.x + 1, if is_even_column(p.x) { p.y } else { p.y + 1 })
}

pub fn up(p: IVec2) -> IVec2 {
    IVec2::new(p.x, p.y - 1)
}

pub fn down(p: IVec2) -> IVec2 {
    IVec2::new(p.x, p.y + 1)
}

/// All six hex neighbors, clockwise from straight up
pub fn hex_neighbors(p: IVec2) -> [IVec2; 6] {
    [
        up(p),
        upper_right(p),
        lower_right(p),
        down(p),
        lower_left(p),
        upper_left(p),
    ]
}

/// Triangular lattice: the cell at `p` has its flat edge on top and its point at the bottom
#[inline]
pub fn triangle_points_down(p: IVec2) -> bool {
    (p.x + p.y) & 1 == 1
}

/// Triangular lattice: the cell at `p` has its point at the top
#[inline]
pub fn triangle_points_up(p: IVec2) -> bool {
    (p.x + p.y) & 1 == 0
}
