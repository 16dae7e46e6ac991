pub mod cost_of_trip;
