use async_trait::async_trait;

use super::Geocoder;
use crate::model::Coordinate;

/// Understands `"35.6812, 139.7671"` typed straight into the search box.
#[derive(Debug, Clone, Default)]
pub struct LiteralGeocoder;

impl LiteralGeocoder {
    pub fn parse(query: &str) -> Option<Coordinate> {
        let (latitude, longitude) = query.split_once(',')?;
        let latitude = latitude.trim().parse::<f64>().ok()?;
        let longitude = longitude.trim().parse::<f64>().ok()?;
        Coordinate::new(latitude, longitude).ok()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Geocoder for LiteralGeocoder {
    async fn lookup(&self, query: &str) -> Option<Coordinate> {
        Self::parse(query)
    }
}
