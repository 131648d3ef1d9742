// Application layer: presentation-side callers of the domain API.

pub mod showcase;
