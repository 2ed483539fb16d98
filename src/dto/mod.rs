pub mod admin_dto;
pub mod enquiry_dto;
pub mod settings_dto;
pub mod testimonial_dto;
pub mod vehicle_dto;
