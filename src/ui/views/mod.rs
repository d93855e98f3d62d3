pub mod digest;
pub mod regions;
pub mod report;
pub mod verify;
