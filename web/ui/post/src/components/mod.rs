pub mod location_picker;
