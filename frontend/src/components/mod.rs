pub mod config_modal;
pub mod faq;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod pricing;
pub mod testimonials;
