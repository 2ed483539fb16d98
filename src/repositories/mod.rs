pub mod admin_repository;
pub mod enquiry_repository;
pub mod settings_repository;
pub mod testimonial_repository;
pub mod vehicle_repository;
