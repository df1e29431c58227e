//! Application services and ports.

#![forbid(unsafe_code)]

mod resource_ports;
mod resource_service;

pub use resource_ports::ResourceRepository;
pub use resource_service::{CreatedResource, PhotoService, ReviewService};
