// Application layer - Use cases and ports
pub mod cached_repository;
pub mod dashboard_service;
pub mod flux_repository;
