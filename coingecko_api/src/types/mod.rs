mod envelope;
pub use self::envelope::Envelope;

mod order;
pub use self::order::Order;

mod status_update;
pub use self::status_update::{StatusUpdateCategory, StatusUpdateProjectType};

mod event;
pub use self::event::EventType;
