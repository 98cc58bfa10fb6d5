pub mod clustering;
pub mod departure;
pub mod error;
pub mod geo_point;
pub mod planner;
pub mod route_params;

#[cfg(test)]
pub(crate) mod test_utils;
