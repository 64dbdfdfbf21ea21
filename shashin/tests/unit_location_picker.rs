use std::sync::Arc;

use pretty_assertions::assert_eq;

use shashin::constants::DEFAULT_CENTER_LATITUDE;
use shashin::constants::DEFAULT_CENTER_LONGITUDE;
use shashin::constants::GEOLOCATION_FAILED;
use shashin::constants::LOCATION_NOT_FOUND;
use shashin::error::CoordinateError;
use shashin::error::GeolocationError;
use shashin::location::LiteralGeocoder;
use shashin::location::LocationPicker;
use shashin::model::Coordinate;
use shashin::testing::GatedGeolocation;
use shashin::testing::StaticGeolocation;

fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

async fn until_locating(picker: &LocationPicker) {
    while !picker.is_locating() {
        tokio::task::yield_now().await;
    }
}

fn picker(initial: Option<Coordinate>, geolocation: Result<Coordinate, GeolocationError>) -> LocationPicker {
    LocationPicker::new(initial, StaticGeolocation::new(geolocation), Arc::new(LiteralGeocoder))
}

mod centre_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_opens_over_japan_without_initial_location() {
        let picker = picker(None, Err(GeolocationError::Timeout));

        assert_eq!(picker.center().latitude(), DEFAULT_CENTER_LATITUDE);
        assert_eq!(picker.center().longitude(), DEFAULT_CENTER_LONGITUDE);
        assert_eq!(picker.initial(), picker.center());
    }

    #[test]
    fn test_opens_at_initial_location() {
        let tokyo = coordinate(35.5, 139.75);
        let picker = picker(Some(tokyo), Err(GeolocationError::Timeout));

        assert_eq!(picker.center(), tokyo);
    }

    #[test]
    fn test_confirm_returns_the_panned_centre() {
        let picker = picker(None, Err(GeolocationError::Timeout));
        let osaka = coordinate(34.75, 135.5);

        picker.pan_to(osaka);

        assert_eq!(picker.confirm(), osaka);
    }

    #[test]
    fn test_cancel_restores_the_initial_centre() {
        let tokyo = coordinate(35.5, 139.75);
        let picker = picker(Some(tokyo), Err(GeolocationError::Timeout));
        picker.pan_to(coordinate(0.0, 0.0));
        picker.query().set("somewhere".to_string());

        picker.cancel();

        assert_eq!(picker.center(), tokyo);
        assert_eq!(picker.query().get_cloned(), "");
        assert_eq!(picker.error(), None);
    }

    #[test]
    fn test_pan_by_moves_the_centre() {
        let picker = picker(Some(coordinate(35.0, 139.0)), Err(GeolocationError::Timeout));

        let moved = picker.pan_by(0.5, -0.25).unwrap();

        assert_eq!(moved, coordinate(35.5, 138.75));
        assert_eq!(picker.center(), moved);
    }

    #[test]
    fn test_pan_by_off_the_globe_leaves_centre_alone() {
        let start = coordinate(89.5, 179.5);
        let picker = picker(Some(start), Err(GeolocationError::Timeout));

        assert_eq!(picker.pan_by(1.0, 0.0), Err(CoordinateError::Latitude(90.5)));
        assert_eq!(picker.pan_by(0.0, 1.0), Err(CoordinateError::Longitude(180.5)));
        assert_eq!(picker.center(), start);
    }
}

mod current_position_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_current_position_recentres() {
        let here = coordinate(43.0625, 141.375);
        let picker = picker(None, Ok(here));

        let result = picker.use_current_position().await;

        assert_eq!(result, Ok(here));
        assert_eq!(picker.center(), here);
        assert_eq!(picker.error(), None);
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_centre_and_reports() {
        let tokyo = coordinate(35.5, 139.75);
        let picker = picker(Some(tokyo), Err(GeolocationError::PermissionDenied));

        let result = picker.use_current_position().await;

        assert_eq!(result, Err(GeolocationError::PermissionDenied));
        assert_eq!(picker.center(), tokyo);
        assert_eq!(picker.error().as_deref(), Some(GEOLOCATION_FAILED));
    }
}

mod stale_lookup_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gated_picker(initial: Coordinate) -> (LocationPicker, shashin::testing::GeolocationGate) {
        let (geolocation, gate) = GatedGeolocation::new();
        (LocationPicker::new(Some(initial), geolocation, Arc::new(LiteralGeocoder)), gate)
    }

    #[tokio::test]
    async fn test_position_arriving_after_cancel_is_dropped() {
        let start = coordinate(35.0, 139.0);
        let (picker, gate) = gated_picker(start);

        let (result, _) = tokio::join!(picker.use_current_position(), async {
            until_locating(&picker).await;
            picker.cancel();
            gate.open(Ok(coordinate(10.0, 10.0)));
        });

        assert_eq!(result, Ok(coordinate(10.0, 10.0)));
        assert_eq!(picker.confirm(), start);
        assert_eq!(picker.error(), None);
        assert!(!picker.is_locating());
    }

    #[tokio::test]
    async fn test_failure_arriving_after_reset_leaves_no_error() {
        let start = coordinate(35.0, 139.0);
        let (picker, gate) = gated_picker(start);

        let (result, _) = tokio::join!(picker.use_current_position(), async {
            until_locating(&picker).await;
            picker.reset();
            gate.open(Err(GeolocationError::PermissionDenied));
        });

        assert_eq!(result, Err(GeolocationError::PermissionDenied));
        assert_eq!(picker.center(), start);
        assert_eq!(picker.error(), None);
    }

    #[tokio::test]
    async fn test_stale_position_does_not_override_a_later_pan() {
        let (picker, gate) = gated_picker(coordinate(35.0, 139.0));

        let (stale, _) = tokio::join!(picker.use_current_position(), async {
            until_locating(&picker).await;
            picker.reset();
            picker.pan_to(coordinate(34.75, 135.5));
            gate.open(Ok(coordinate(10.0, 10.0)));
        });

        assert!(stale.is_ok());
        assert_eq!(picker.confirm(), coordinate(34.75, 135.5));
    }
}

mod search_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_recentres_on_hit() {
        let picker = picker(None, Err(GeolocationError::Timeout));
        picker.query().set("35.5, 139.75".to_string());

        let found = tokio_test::block_on(picker.search());

        assert_eq!(found, Some(coordinate(35.5, 139.75)));
        assert_eq!(picker.center(), coordinate(35.5, 139.75));
    }

    #[test]
    fn test_search_miss_keeps_centre_and_reports() {
        let picker = picker(None, Err(GeolocationError::Timeout));
        picker.query().set("Mount Fuji".to_string());

        let found = tokio_test::block_on(picker.search());

        assert_eq!(found, None);
        assert_eq!(picker.center(), Coordinate::default());
        assert_eq!(picker.error().as_deref(), Some(LOCATION_NOT_FOUND));
    }

    #[test]
    fn test_blank_search_is_a_no_op() {
        let picker = picker(None, Err(GeolocationError::Timeout));
        picker.query().set("   ".to_string());

        assert_eq!(tokio_test::block_on(picker.search()), None);
        assert_eq!(picker.error(), None);
    }

    #[test]
    fn test_successful_search_clears_previous_error() {
        let picker = picker(None, Err(GeolocationError::Timeout));
        picker.query().set("nowhere".to_string());
        tokio_test::block_on(picker.search());

        picker.query().set("34.75, 135.5".to_string());
        tokio_test::block_on(picker.search());

        assert_eq!(picker.error(), None);
    }
}
