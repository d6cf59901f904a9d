use super::actor::Vec2;
use super::tile_grid::TileGrid;

/// Offset of the second sample point along the leading edge. Slightly under a full tile
/// so an actor flush with a row or column boundary does not catch the next one.
pub const EDGE_SAMPLE_SPAN: f64 = 0.9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub x: bool,
    pub y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub position: Vec2,
    pub velocity: Vec2,
    pub contact: Contact,
}

/// Corrects a proposed move of a one-tile actor against solid tiles.
///
/// Axes resolve independently, X first. The X check uses the current (pre-move)
/// Y; the Y check uses the already resolved X. This ordering is what lets an
/// actor slide along a wall while moving diagonally.
pub fn resolve(grid: &TileGrid, current: Vec2, proposed: Vec2, velocity: Vec2) -> Resolution {
    let mut position = proposed;
    let mut velocity = velocity;
    let mut contact = Contact::default();

    let row_top = tile(current.y);
    let row_bottom = tile(current.y + EDGE_SAMPLE_SPAN);
    if velocity.x <= 0.0 {
        let column = tile(position.x);
        if grid.get_solid(column, row_top) || grid.get_solid(column, row_bottom) {
            position.x = f64::from(column) + 1.0;
            velocity.x = 0.0;
            contact.x = true;
        }
    } else {
        let column = tile(position.x + 1.0);
        if grid.get_solid(column, row_top) || grid.get_solid(column, row_bottom) {
            position.x = position.x.floor();
            velocity.x = 0.0;
            contact.x = true;
        }
    }

    let column_left = tile(position.x);
    let column_right = tile(position.x + EDGE_SAMPLE_SPAN);
    if velocity.y <= 0.0 {
        let row = tile(position.y);
        if grid.get_solid(column_left, row) || grid.get_solid(column_right, row) {
            position.y = f64::from(row) + 1.0;
            velocity.y = 0.0;
            contact.y = true;
        }
    } else {
        let row = tile(position.y + 1.0);
        if grid.get_solid(column_left, row) || grid.get_solid(column_right, row) {
            position.y = position.y.floor();
            velocity.y = 0.0;
            contact.y = true;
        }
    }

    Resolution {
        position,
        velocity,
        contact,
    }
}

fn tile(coordinate: f64) -> i32 {
    // `as` saturates, so huge or non-finite coordinates land out of range
    // and read as passable.
    coordinate.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> TileGrid {
        TileGrid::parse(text).expect("grid")
    }

    // 3x3 room, solid border except the open middle tile
    const ROOM: &str = "3 3\n0 1 0 1 0 1\n0 1 0 0 0 1\n0 1 0 1 0 1";

    #[test]
    fn moving_left_into_wall_snaps_to_right_boundary() {
        let room = grid(ROOM);
        let result = resolve(
            &room,
            Vec2::new(1.0, 1.0),
            Vec2::new(0.95, 1.0),
            Vec2::new(-0.05, 0.0),
        );

        assert_eq!(result.position.x, 1.0);
        assert_eq!(result.velocity.x, 0.0);
        assert!(result.contact.x);
    }

    #[test]
    fn moving_right_into_wall_stops_flush() {
        let room = grid(ROOM);
        let result = resolve(
            &room,
            Vec2::new(1.0, 1.0),
            Vec2::new(1.07, 1.0),
            Vec2::new(0.07, 0.0),
        );

        assert_eq!(result.position.x, 1.0);
        assert_eq!(result.velocity.x, 0.0);
    }

    #[test]
    fn vertical_walls_snap_symmetrically() {
        let room = grid(ROOM);
        let up = resolve(
            &room,
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.9),
            Vec2::new(0.0, -0.1),
        );
        assert_eq!(up.position.y, 1.0);
        assert_eq!(up.velocity.y, 0.0);
        assert!(up.contact.y);

        let down = resolve(
            &room,
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.2),
            Vec2::new(0.0, 0.2),
        );
        assert_eq!(down.position.y, 1.0);
        assert_eq!(down.velocity.y, 0.0);
    }

    #[test]
    fn free_movement_is_untouched() {
        let open = grid("3 3\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0");
        let result = resolve(
            &open,
            Vec2::new(1.0, 1.0),
            Vec2::new(1.1, 0.8),
            Vec2::new(0.1, -0.2),
        );

        assert_eq!(result.position, Vec2::new(1.1, 0.8));
        assert_eq!(result.velocity, Vec2::new(0.1, -0.2));
        assert_eq!(result.contact, Contact::default());
    }

    #[test]
    fn diagonal_move_slides_along_wall() {
        // wall column at x=2, open floor elsewhere
        let walled = grid("3 3\n0 0 0 0 0 1\n0 0 0 0 0 1\n0 0 0 0 0 1");
        let result = resolve(
            &walled,
            Vec2::new(1.0, 1.0),
            Vec2::new(1.05, 1.05),
            Vec2::new(0.05, 0.05),
        );

        assert_eq!(result.position.x, 1.0);
        assert_eq!(result.velocity.x, 0.0);
        assert_eq!(result.position.y, 1.05);
        assert_eq!(result.velocity.y, 0.05);
        assert!(result.contact.x);
        assert!(!result.contact.y);
    }

    #[test]
    fn x_check_uses_pre_move_row() {
        // solid tile at (0,1) only; the actor sits in row 0 and drifts down-left
        let corner = grid("2 2\n0 0 0 0\n0 1 0 0");
        let result = resolve(
            &corner,
            Vec2::new(1.0, 0.0),
            Vec2::new(0.95, 0.05),
            Vec2::new(-0.05, 0.05),
        );

        // the lower sample at y=0.9 stays in row 0, so x is free; y then hits (0,1)
        assert_eq!(result.position.x, 0.95);
        assert!(!result.contact.x);
        assert_eq!(result.position.y, 0.0);
        assert!(result.contact.y);
    }

    #[test]
    fn out_of_grid_reads_passable() {
        let single = grid("1 1\n0 0");
        let result = resolve(
            &single,
            Vec2::new(0.0, 0.0),
            Vec2::new(-0.5, -0.5),
            Vec2::new(-0.5, -0.5),
        );

        assert_eq!(result.position, Vec2::new(-0.5, -0.5));
        assert_eq!(result.contact, Contact::default());
    }
}
