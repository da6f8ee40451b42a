use bevy::prelude::*;

/// Ray against a box of `size` centred on `xf`, in that transform's frame.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        if ray_direction[axis] == 0.0 {
            // Parallel to this slab: inside it or never.
            if ray_origin[axis] < min[axis] || ray_origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / ray_direction[axis];
        let (mut t0, mut t1) = (
            (min[axis] - ray_origin[axis]) * inv,
            (max[axis] - ray_origin[axis]) * inv,
        );
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Ray against a sphere, `dir` need not be normalised. Returns the first
/// non-negative hit distance in units of `dir`.
pub fn ray_hits_sphere(origin: Vec3, dir: Vec3, centre: Vec3, radius: f32) -> Option<f32> {
    let offset = origin - centre;
    let a = dir.length_squared();
    if a == 0.0 {
        return None;
    }
    let half_b = offset.dot(dir);
    let c = offset.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = (-half_b - root) / a;
    let far = (-half_b + root) / a;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slab_test_hits_front_face() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, Some(9.0));
    }

    #[test]
    fn slab_test_misses_parallel_ray_outside() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 2.0, 10.0), Vec3::NEG_Z, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn zero_axis_inside_slab_still_hits() {
        let dir = Vec3::new(0.0, -1.0, -1.0);
        let t = ray_aabb_hit_t(Vec3::new(0.5, 5.0, 5.0), dir, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn box_behind_origin_is_not_hit() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn rotated_box_uses_its_own_frame() {
        // A thin plate in local XY, turned to lie flat: hit from above, not from the side.
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 5.0, 0.0)
                .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
        );
        let size = Vec3::new(4.0, 4.0, 0.2);
        let from_above = ray_hits_obb(Vec3::new(1.5, 20.0, 0.0), Vec3::NEG_Y, &xf, size);
        assert!(from_above.is_some_and(|t| (t - 14.9).abs() < 1e-4));
        let from_side = ray_hits_obb(Vec3::new(-10.0, 6.0, 0.0), Vec3::X, &xf, size);
        assert_eq!(from_side, None);
    }

    #[test]
    fn sphere_hit_distance_and_inside_origin() {
        let t = ray_hits_sphere(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert_eq!(t, Some(8.0));
        let inside = ray_hits_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert_eq!(inside, Some(2.0));
        let miss = ray_hits_sphere(Vec3::new(0.0, 3.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert_eq!(miss, None);
    }
}
