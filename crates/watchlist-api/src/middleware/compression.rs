//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer for JSON views.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
