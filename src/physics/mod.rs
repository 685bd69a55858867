pub mod atmosphere;
pub mod forces;
pub mod volume;
