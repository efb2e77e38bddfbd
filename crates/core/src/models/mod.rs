//! Domain models for the workshop console.

pub mod registration;
pub mod session;
pub mod workshop;

pub use registration::CustomerRegistration;
pub use session::{Gate, LOGIN_PATH, Session};
pub use workshop::{DATE_LABEL_FORMAT, WorkshopDate, WorkshopTime};
