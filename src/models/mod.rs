pub mod admin;
pub mod enquiry;
pub mod settings;
pub mod testimonial;
pub mod vehicle;
