pub mod admin_controller;
pub mod enquiry_controller;
pub mod settings_controller;
pub mod testimonial_controller;
pub mod vehicle_controller;
