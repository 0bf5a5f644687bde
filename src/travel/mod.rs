pub mod in_memory;
pub mod port;
pub mod record;

pub use in_memory::InMemoryTravelHistory;
pub use port::TravelHistory;
pub use record::TravelRecord;
