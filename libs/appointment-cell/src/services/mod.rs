pub mod booking;
pub mod conflict;

pub use booking::AppointmentBookingService;
pub use conflict::has_conflict;
