//! Movement rules: where an agent of a given height may stand.

use cairn_volume::Volume;

/// Everything a path query needs to judge a step.
///
/// `obstacles` is an optional mask with the same layout as the voxel buffer;
/// a non-zero entry blocks the cell for walking without changing its
/// appearance. `min_y..=max_y` bound the *floor* cell of any step, keeping
/// agents out of basements and off rooftops.
#[derive(Clone, Copy)]
pub struct PathContext<'a> {
    pub volume: &'a Volume,
    pub voxels: &'a [u8],
    pub obstacles: Option<&'a [u8]>,
    /// Agent height in cells; every cell of the body needs air.
    pub agent_height: i32,
    /// Abort the search after this many node expansions.
    pub max_visited: usize,
    /// Lowest floor y an admissible step may rest on.
    pub min_y: i32,
    /// Highest floor y an admissible step may rest on.
    pub max_y: i32,
}

impl PathContext<'_> {
    fn obstructed(&self, i: usize) -> bool {
        self.obstacles.is_some_and(|mask| mask[i] != 0)
    }

    /// Returns `true` if an agent body standing at `(x, y, z)` fits: every
    /// cell from its feet up is in-bounds air and unobstructed.
    pub fn can_go_through(&self, x: i32, y: i32, z: i32) -> bool {
        for h in 0..self.agent_height {
            match self.volume.index(x, y + h, z) {
                Some(i) if self.voxels[i] == 0 && !self.obstructed(i) => {}
                _ => return false,
            }
        }
        true
    }

    /// Returns `true` if an agent may stand with its feet at `(x, y, z)`:
    /// the floor below is solid, unobstructed, and inside the y band, and
    /// the body fits above it.
    pub fn can_step_at(&self, x: i32, y: i32, z: i32) -> bool {
        if y - 1 < self.min_y || y - 1 > self.max_y {
            return false;
        }
        match self.volume.index(x, y - 1, z) {
            Some(i) if self.voxels[i] != 0 && !self.obstructed(i) => {}
            _ => return false,
        }
        self.can_go_through(x, y, z)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_world() -> (Volume, Vec<u8>) {
        let volume = Volume::new(6, 4, 6, 4, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        for z in 0..6 {
            for x in 0..6 {
                voxels[volume.index(x, 0, z).unwrap()] = 1;
            }
        }
        (volume, voxels)
    }

    fn context<'a>(volume: &'a Volume, voxels: &'a [u8]) -> PathContext<'a> {
        PathContext {
            volume,
            voxels,
            obstacles: None,
            agent_height: 2,
            max_visited: 1024,
            min_y: 0,
            max_y: 3,
        }
    }

    #[test]
    fn test_step_on_flat_ground() {
        let (volume, voxels) = flat_world();
        let ctx = context(&volume, &voxels);
        assert!(ctx.can_step_at(2, 1, 2));
        // No floor at y=2.
        assert!(!ctx.can_step_at(2, 2, 2));
    }

    #[test]
    fn test_head_clearance_required() {
        let (volume, mut voxels) = flat_world();
        // Ceiling one cell above the head slot.
        voxels[volume.index(2, 2, 2).unwrap()] = 1;
        let ctx = context(&volume, &voxels);
        assert!(!ctx.can_step_at(2, 1, 2), "agent of height 2 cannot fit");

        let short = PathContext {
            agent_height: 1,
            ..ctx
        };
        assert!(short.can_step_at(2, 1, 2), "agent of height 1 still fits");
    }

    #[test]
    fn test_floor_band_limits_steps() {
        let (volume, mut voxels) = flat_world();
        voxels[volume.index(3, 1, 3).unwrap()] = 1;
        let ctx = context(&volume, &voxels);
        assert!(ctx.can_step_at(3, 2, 3), "standing on the raised block");

        let banded = PathContext {
            max_y: 0,
            ..ctx
        };
        assert!(
            !banded.can_step_at(3, 2, 3),
            "floor y=1 is above the allowed band"
        );
        let raised = PathContext {
            min_y: 1,
            ..ctx
        };
        assert!(
            !raised.can_step_at(2, 1, 2),
            "floor y=0 is below the allowed band"
        );
    }

    #[test]
    fn test_obstacle_mask_blocks_floor_and_body() {
        let (volume, voxels) = flat_world();
        let mut obstacles = vec![0u8; volume.cell_count()];
        let ctx = context(&volume, &voxels);
        assert!(ctx.can_step_at(4, 1, 4));

        // Marking the body cell blocks the step.
        obstacles[volume.index(4, 1, 4).unwrap()] = 1;
        let blocked = PathContext {
            obstacles: Some(&obstacles),
            ..ctx
        };
        assert!(!blocked.can_step_at(4, 1, 4));

        // Marking only the floor cell blocks it too.
        obstacles[volume.index(4, 1, 4).unwrap()] = 0;
        obstacles[volume.index(4, 0, 4).unwrap()] = 1;
        let blocked = PathContext {
            obstacles: Some(&obstacles),
            ..ctx
        };
        assert!(!blocked.can_step_at(4, 1, 4));
    }

    #[test]
    fn test_out_of_bounds_never_steppable() {
        let (volume, voxels) = flat_world();
        let ctx = context(&volume, &voxels);
        assert!(!ctx.can_step_at(-1, 1, 2));
        assert!(!ctx.can_step_at(2, 1, 6));
        // Body poking out of the volume top.
        assert!(!ctx.can_go_through(2, 3, 2));
    }
}
