use serde::Serialize;

/// Clock event kinds. The DB and the HTML form speak the Spanish wire
/// strings; the enum keeps the rest of the code typed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    Entry,
    Exit,
    PauseStart,
    PauseEnd,
}

impl EventType {
    /// Convert enum → DB/form string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::Entry => "Entrada",
            EventType::Exit => "Salida",
            EventType::PauseStart => "Pausa",
            EventType::PauseEnd => "Fin pausa",
        }
    }

    /// Convert DB/form string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Entrada" => Some(EventType::Entry),
            "Salida" => Some(EventType::Exit),
            "Pausa" => Some(EventType::PauseStart),
            "Fin pausa" => Some(EventType::PauseEnd),
            _ => None,
        }
    }
}
