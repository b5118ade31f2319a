//! # pointset-triangulation
//!
//! This is a library for triangulating 2D point sets delivered in a compact binary format.
//! A point set is decoded, fan-triangulated from its first point, and encoded back with the
//! triangles expressed as indices into the original payload.
//!
//! # Features
//!
//! - Strict little-endian wire codec for point sets and triangulation results
//! - Fan triangulation with a fixed collinearity tolerance
//! - A closed vocabulary of failure conditions with a fixed mapping to HTTP status and error codes
//! - Pluggable point-set sources (in-memory, and blocking HTTP with the `http` feature)
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use pointset_triangulation::prelude::*;
//!
//! // Unit square: 4 points, counter-clockwise
//! let points: PointSet = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
//!     .into_iter()
//!     .map(Point::new)
//!     .collect();
//!
//! let payload = encode_point_set(&points).unwrap();
//! assert_eq!(payload.len(), 4 + 4 * 8);
//!
//! let result = triangulate_payload(&payload).unwrap();
//! // original payload, then the triangle count, then 3 indices per triangle
//! assert_eq!(result.len(), payload.len() + 4 + 2 * 12);
//! ```
//!
//! # Failure Classification
//!
//! Every stage fails with its own error type. Each error reduces to one
//! [`FailureCondition`](core::failure::FailureCondition), which in turn selects the
//! status and code reported to clients:
//!
//! ```rust
//! use pointset_triangulation::prelude::*;
//!
//! // Three collinear points cannot be triangulated
//! let points: PointSet = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]
//!     .into_iter()
//!     .map(Point::new)
//!     .collect();
//! let payload = encode_point_set(&points).unwrap();
//!
//! let err = triangulate_payload(&payload).unwrap_err();
//! assert_eq!(err.condition(), FailureCondition::InvalidPointset);
//! assert_eq!(err.external_status().status, 400);
//! assert_eq!(err.external_status().code, ExternalCode::InvalidRequest);
//! ```
//!
//! # Serving By Identifier
//!
//! [`TriangulationService`](service::triangulation_service::TriangulationService) resolves a
//! point-set identifier through a [`PointSetSource`](service::source::PointSetSource) and
//! produces a transport-agnostic response:
//!
//! ```rust
//! use pointset_triangulation::prelude::*;
//!
//! let id: PointSetId = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
//! let points: PointSet = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
//!     .into_iter()
//!     .map(Point::new)
//!     .collect();
//!
//! let source: InMemoryPointSetSource =
//!     std::iter::once((id, encode_point_set(&points).unwrap())).collect();
//! let service = TriangulationService::new(source);
//!
//! let response = service.respond(&id.to_string());
//! assert_eq!(response.status, 200);
//! assert_eq!(response.content_type(), "application/octet-stream");
//!
//! let response = service.respond("not-a-uuid");
//! assert_eq!(response.status, 400);
//! ```

// Allow multiple crate versions due to transitive dependencies
#![allow(clippy::multiple_crate_versions)]
// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the point-set data model, the triangulation algorithm and the
/// failure vocabulary shared by every stage.
pub mod core {
    /// Triangulation algorithms
    pub mod algorithms {
        /// Fan triangulation from the first point
        pub mod fan_triangulation;
        pub use fan_triangulation::*;
    }
    /// Hash map aliases used throughout the crate
    pub mod collections;
    pub mod failure;
    pub mod pipeline;
    pub mod point_set;
    pub mod triangle;

    pub use algorithms::*;
    pub use failure::*;
    pub use pipeline::*;
    pub use point_set::*;
    pub use triangle::*;
}

/// Contains geometric types including the `Point` struct and the orientation predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;

    pub use point::*;
    pub use predicates::*;
}

/// Binary wire codec for point sets and triangulation results.
pub mod io {
    pub mod decoder;
    pub mod encoder;
    /// Wire layout constants and primitive readers
    pub mod wire;

    pub use decoder::*;
    pub use encoder::*;
}

/// Request handling by point-set identifier: identifiers, configuration, sources and responses.
pub mod service {
    pub mod config;
    #[cfg(feature = "http")]
    pub mod http;
    pub mod id;
    pub mod response;
    pub mod source;
    pub mod triangulation_service;

    pub use config::*;
    #[cfg(feature = "http")]
    pub use http::*;
    pub use id::*;
    pub use response::*;
    pub use source::*;
    pub use triangulation_service::*;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::fan_triangulation::*, failure::*, pipeline::*, point_set::*, triangle::*,
    };

    pub use crate::core::collections::{FastHashMap, fast_hash_map_with_capacity};

    // Re-export from geometry
    pub use crate::geometry::{point::*, predicates::*};

    // Re-export from io
    pub use crate::io::{decoder::*, encoder::*};

    // Re-export from service
    #[cfg(feature = "http")]
    pub use crate::service::http::*;
    pub use crate::service::{config::*, id::*, response::*, source::*, triangulation_service::*};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{
        core::{pipeline::PipelineError, point_set::PointSet, triangle::Triangle},
        geometry::point::Point,
        is_normal,
        service::{
            config::SourceConfig, id::PointSetId, response::ServiceResponse,
            source::InMemoryPointSetSource, triangulation_service::TriangulationService,
        },
    };

    // =============================================================================
    // TYPE SAFETY TESTS
    // =============================================================================

    #[test]
    fn normal_types() {
        assert!(is_normal::<Point>());
        assert!(is_normal::<PointSet>());
        assert!(is_normal::<Triangle>());
        assert!(is_normal::<PointSetId>());
        assert!(is_normal::<PipelineError>());
        assert!(is_normal::<SourceConfig>());
        assert!(is_normal::<ServiceResponse>());
        assert!(is_normal::<TriangulationService<InMemoryPointSetSource>>());
    }

    #[cfg(feature = "http")]
    #[test]
    fn normal_http_types() {
        assert!(is_normal::<crate::service::http::HttpPointSetSource>());
    }

    #[test]
    fn test_prelude_exports() {
        use crate::prelude::*;

        let mut map: FastHashMap<u64, usize> = fast_hash_map_with_capacity(4);
        map.insert(123, 456);
        assert_eq!(map.get(&123), Some(&456));

        let points: PointSet = [[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]]
            .into_iter()
            .map(Point::new)
            .collect();
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].orientation(), Orientation::POSITIVE);

        let payload = encode_point_set(&points).unwrap();
        assert_eq!(decode_point_set(&payload).unwrap(), points);
        assert_eq!(FailureCondition::ALL.len(), 11);
    }
}
