pub mod computed_holding;
pub mod holding;
pub mod sector;

pub use computed_holding::ComputedHolding;
pub use holding::Holding;
pub use sector::SectorAggregate;
