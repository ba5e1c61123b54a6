pub mod feedback;
pub mod inspect;
pub mod listing;
pub mod numbers;
pub mod record;
pub mod rollups;
pub mod summary;
pub mod window;
