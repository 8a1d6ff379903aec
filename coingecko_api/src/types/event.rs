use std::str::FromStr;

/// Event-type filter for `/events`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventType {
    Event,
    Conference,
    Meetup,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::Event => "Event",
            EventType::Conference => "Conference",
            EventType::Meetup => "Meetup",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EventType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Event" | "event" => Ok(EventType::Event),
            "Conference" | "conference" => Ok(EventType::Conference),
            "Meetup" | "meetup" => Ok(EventType::Meetup),
            _ => Err(()),
        }
    }
}
