pub mod google_geocoding_api;
pub mod tomtom_api;
pub mod waypoint_optimization;
pub mod waypoint_optimizer;
