//! Map location picker: the pin stays at the map centre and the user moves the map.

mod geocoder;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use futures_signals::signal::Mutable;
use futures_signals::signal::Signal;
use tracing::debug;
use tracing::warn;

pub use geocoder::LiteralGeocoder;

use crate::constants::GEOLOCATION_FAILED;
use crate::constants::LOCATION_NOT_FOUND;
use crate::error::CoordinateError;
use crate::error::GeolocationError;
use crate::model::Coordinate;

/// The platform's "where am I" capability.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Geolocation: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// Turns a search-box query into a place.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Geocoder: Send + Sync {
    async fn lookup(&self, query: &str) -> Option<Coordinate>;
}

pub struct LocationPicker {
    initial: Coordinate,
    center: Mutable<Coordinate>,
    query: Mutable<String>,
    error: Mutable<Option<String>>,
    locating: Mutable<bool>,
    // Bumped by reset/cancel so lookups from a discarded session write nothing
    generation: AtomicU64,
    geolocation: Arc<dyn Geolocation>,
    geocoder: Arc<dyn Geocoder>,
}

impl LocationPicker {
    /// Without an `initial` centre the map opens over the whole country.
    pub fn new(initial: Option<Coordinate>, geolocation: Arc<dyn Geolocation>, geocoder: Arc<dyn Geocoder>) -> Self {
        let initial = initial.unwrap_or_default();
        Self {
            initial,
            center: Mutable::new(initial),
            query: Mutable::new(String::new()),
            error: Mutable::new(None),
            locating: Mutable::new(false),
            generation: AtomicU64::new(0),
            geolocation,
            geocoder,
        }
    }

    pub fn initial(&self) -> Coordinate {
        self.initial
    }

    pub fn center(&self) -> Coordinate {
        self.center.get()
    }

    pub fn query(&self) -> &Mutable<String> {
        &self.query
    }

    pub fn error(&self) -> Option<String> {
        self.error.get_cloned()
    }

    pub fn is_locating(&self) -> bool {
        self.locating.get()
    }

    pub fn center_signal(&self) -> impl Signal<Item = Coordinate> + use<> {
        self.center.signal()
    }

    pub fn error_signal(&self) -> impl Signal<Item = Option<String>> + use<> {
        self.error.signal_cloned()
    }

    pub fn locating_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.locating.signal()
    }

    /// The map surface reports its new centre after the user drags it.
    pub fn pan_to(&self, center: Coordinate) {
        self.center.set_neq(center);
    }

    /// Moves the centre by a delta. Leaves the map where it is if that would leave the globe.
    pub fn pan_by(&self, delta_latitude: f64, delta_longitude: f64) -> Result<Coordinate, CoordinateError> {
        let current = self.center.get();
        let next = Coordinate::new(current.latitude() + delta_latitude, current.longitude() + delta_longitude)?;
        self.center.set_neq(next);
        Ok(next)
    }

    /// Looks up the current search-box text and recentres on the hit.
    pub async fn search(&self) -> Option<Coordinate> {
        let query = self.query.get_cloned();
        if query.trim().is_empty() {
            return None;
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let found = self.geocoder.lookup(query.trim()).await;
        if self.is_stale(generation) {
            debug!("location_picker::search::discarded");
            return found;
        }

        match found {
            Some(found) => {
                debug!("location_picker::search::found::{}", found);
                self.center.set_neq(found);
                self.error.set(None);
                Some(found)
            },
            None => {
                debug!("location_picker::search::not_found::{}", query);
                self.error.set(Some(LOCATION_NOT_FOUND.to_string()));
                None
            },
        }
    }

    /// Recentres on the device position. On failure the centre is left untouched.
    ///
    /// A reply that arrives after `reset`/`cancel` is returned but never written.
    pub async fn use_current_position(&self) -> Result<Coordinate, GeolocationError> {
        let generation = self.generation.load(Ordering::SeqCst);
        self.locating.set_neq(true);
        let result = self.geolocation.current_position().await;
        if self.is_stale(generation) {
            debug!("location_picker::current_position::discarded");
            return result;
        }
        self.locating.set_neq(false);

        match &result {
            Ok(position) => {
                self.center.set_neq(*position);
                self.error.set(None);
            },
            Err(e) => {
                warn!("location_picker::current_position::failed::{}", e);
                self.error.set(Some(GEOLOCATION_FAILED.to_string()));
            },
        }
        result
    }

    /// The coordinate under the pin.
    pub fn confirm(&self) -> Coordinate {
        self.center.get()
    }

    /// Drops everything the user did since the picker opened.
    pub fn cancel(&self) {
        self.reset();
    }

    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.center.set_neq(self.initial);
        self.query.set_neq(String::new());
        self.error.set(None);
        self.locating.set_neq(false);
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}
