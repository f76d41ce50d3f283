pub mod completion_client;
pub mod in_flight;
pub mod key_points;
pub mod pdf_service;
pub mod quiz_attempt_service;
pub mod quiz_generation_service;
