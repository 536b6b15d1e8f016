pub mod airport;
pub mod flight;
pub mod location;
pub mod setting;
pub mod summary;
