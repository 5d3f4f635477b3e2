use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Un "props" guardado en el contrato (inmutable una vez creado)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropRecord {
    pub sender: String,
    pub receiver: String,
    pub message: String,
    /// Timestamp del bloque en nanosegundos
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub timestamp: u64,
}

impl PropRecord {
    /// Clave única `sender:receiver:timestamp`
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.sender, self.receiver, self.timestamp)
    }

    pub fn headline(&self) -> String {
        format!("{} gave {} props for:", self.sender, self.receiver)
    }

    /// Línea completa, p.ej. "alice gave bob props for: thanks"
    pub fn summary(&self) -> String {
        format!("{} {}", self.headline(), self.message)
    }

    pub fn given_at(&self) -> Option<DateTime<Utc>> {
        let nanos = i64::try_from(self.timestamp).ok()?;
        Some(DateTime::<Utc>::from_timestamp_nanos(nanos))
    }
}

/// Argumentos de la llamada `giveProps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivePropsArgs {
    pub receiver: String,
    pub message: String,
}

// Los u64 de contratos AssemblyScript llegan como string JSON
fn u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
