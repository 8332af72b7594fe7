//! 3D coordinate projection for visualization.

/// Project an embedding onto a unit 3D coordinate.
///
/// Takes the first three components (right-zero-padded if the vector is
/// shorter) and divides by their norm. A zero norm divides by 1.0 instead,
/// yielding the zero coordinate rather than failing — callers render that
/// at the origin. No inverse mapping exists.
pub fn project_to_3d(embedding: &[f32]) -> [f32; 3] {
    let mut coords = [0.0f32; 3];
    for (slot, value) in coords.iter_mut().zip(embedding) {
        *slot = *value;
    }

    let norm = coords.iter().map(|x| x * x).sum::<f32>().sqrt();
    let divisor = if norm == 0.0 { 1.0 } else { norm };
    coords.map(|x| x / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_unit_norm() {
        let coords = project_to_3d(&[0.3, 0.4, 0.5, 0.9, 0.1]);
        let norm: f32 = coords.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn short_vector_is_zero_padded() {
        let coords = project_to_3d(&[0.5]);
        assert_eq!(coords, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_leading_components_map_to_origin() {
        let coords = project_to_3d(&[0.0, 0.0, 0.0, 0.8, 0.2]);
        assert_eq!(coords, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_vector_maps_to_origin() {
        assert_eq!(project_to_3d(&[]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn projecting_a_projection_is_stable() {
        let first = project_to_3d(&[0.1, 0.2, 0.3]);
        let second = project_to_3d(&first);
        for (a, b) in first.iter().zip(second.iter()) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}
