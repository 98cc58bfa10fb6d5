pub mod departure_search;
pub mod departure_time;
pub mod hour_window;
pub mod search_state;
