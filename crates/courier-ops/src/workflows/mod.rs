pub mod rating;
pub mod report;
pub mod roster;
pub mod router;
