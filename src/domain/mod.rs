// Domain layer: the Speaker, Venue and Event entities and their guard-enforced invariants.

pub mod event;
pub mod speaker;
pub mod venue;

pub use event::Event;
pub use speaker::Speaker;
pub use venue::Venue;
