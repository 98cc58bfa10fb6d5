pub mod k_means;
pub mod point_reducer;
