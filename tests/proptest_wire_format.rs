//! Property-based tests for the point-set and result wire formats.
//!
//! This module uses proptest to verify:
//! - Encoded point sets decode back to the same points
//! - Any buffer whose length disagrees with its count is rejected
//! - Result payloads start with the original bytes verbatim
//! - Triangle indices point at the triangle's vertices in the original payload

use pointset_triangulation::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite f32 coordinates
fn finite_f32() -> impl Strategy<Value = f32> {
    (-1.0e6_f32..1.0e6_f32).prop_filter("must be finite", |x: &f32| x.is_finite())
}

/// Strategy for generating point sets of up to `max` finite points
fn point_set(max: usize) -> impl Strategy<Value = PointSet> {
    prop::collection::vec(prop::array::uniform2(finite_f32()).prop_map(Point::new), 0..=max)
        .prop_map(PointSet::from)
}

/// Strategy for fan-triangulable point sets: points on a parabola, so no
/// three are collinear and every coordinate is an exact small integer.
fn parabola_point_set() -> impl Strategy<Value = PointSet> {
    (-50_i16..50, 3_i16..64).prop_map(|(start, n)| {
        (start..start + n)
            .map(|x| Point::new([f32::from(x), f32::from(x * x)]))
            .collect()
    })
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

// =============================================================================
// POINT-SET ENCODING
// =============================================================================

proptest! {
    /// Property: decode inverts encode for finite points.
    #[test]
    fn prop_point_set_decodes_to_itself(points in point_set(128)) {
        let bytes = encode_point_set(&points).unwrap();
        prop_assert_eq!(bytes.len(), 4 + 8 * points.len());
        prop_assert_eq!(read_u32(&bytes, 0) as usize, points.len());

        let decoded = decode_point_set(&bytes).unwrap();
        prop_assert_eq!(decoded, points);
    }

    /// Property: dropping or appending bytes is always detected.
    #[test]
    fn prop_length_mismatch_is_rejected(
        points in point_set(32),
        extra in prop::collection::vec(any::<u8>(), 1..16),
        cut in 1_usize..8,
    ) {
        let bytes = encode_point_set(&points).unwrap();

        let mut longer = bytes.clone();
        longer.extend_from_slice(&extra);
        prop_assert_eq!(
            decode_point_set(&longer).unwrap_err().condition(),
            FailureCondition::DecodeError
        );

        let shorter = &bytes[..bytes.len().saturating_sub(cut)];
        let expected = if shorter.len() < 4 {
            FailureCondition::InvalidResponseFormat
        } else {
            FailureCondition::DecodeError
        };
        prop_assert_eq!(decode_point_set(shorter).unwrap_err().condition(), expected);
    }

    /// Property: arbitrary bytes either decode consistently or fail with a
    /// decoder tag; the decoder never panics.
    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        match decode_point_set(&bytes) {
            Ok(points) => {
                prop_assert_eq!(bytes.len(), 4 + 8 * points.len());
                prop_assert!(points.iter().all(Point::is_finite));
            }
            Err(e) => prop_assert!(matches!(
                e.condition(),
                FailureCondition::InvalidResponseFormat | FailureCondition::DecodeError
            )),
        }
    }
}

// =============================================================================
// RESULT ENCODING
// =============================================================================

proptest! {
    /// Property: the result is the original payload, the triangle count, and
    /// the indices of each triangle's vertices.
    #[test]
    fn prop_result_layout(points in parabola_point_set()) {
        let original = encode_point_set(&points).unwrap();
        let triangles = triangulate(&points).unwrap();
        let out = encode_triangulation(&original, &triangles).unwrap();

        prop_assert_eq!(out.len(), original.len() + 4 + 12 * triangles.len());
        prop_assert_eq!(&out[..original.len()], original.as_slice());
        prop_assert_eq!(read_u32(&out, original.len()) as usize, triangles.len());

        let records = original.len() + 4;
        for (t, triangle) in triangles.iter().enumerate() {
            for (v, vertex) in triangle.vertices().iter().enumerate() {
                let index = read_u32(&out, records + 12 * t + 4 * v) as usize;
                prop_assert_eq!(&points[index], vertex);
            }
        }
    }

    /// Property: the full pipeline agrees with running the stages by hand.
    #[test]
    fn prop_pipeline_matches_stages(points in parabola_point_set()) {
        let original = encode_point_set(&points).unwrap();
        let by_stage = encode_triangulation(&original, &triangulate(&points).unwrap()).unwrap();
        prop_assert_eq!(triangulate_payload(&original).unwrap(), by_stage);
    }
}
