// Domain layer - Pure models and the core transform
pub mod classification;
pub mod dashboard;
pub mod reading;
pub mod window;
