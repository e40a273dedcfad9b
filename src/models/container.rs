//! Containers and temperature classes.

use serde::{Deserialize, Serialize};

/// Temperature class of a container, selecting the truck compartment it uses.
///
/// Serialized with the wire codes `"AM"` and `"RE"`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Temperature;
///
/// assert_eq!(Temperature::from_code("RE"), Some(Temperature::Refrigerated));
/// assert_eq!(Temperature::Ambient.code(), "AM");
/// assert!(Temperature::from_code("FR").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    /// Ambient (dry) cargo.
    #[serde(rename = "AM")]
    Ambient,
    /// Refrigerated cargo.
    #[serde(rename = "RE")]
    Refrigerated,
}

impl Temperature {
    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AM" => Some(Self::Ambient),
            "RE" => Some(Self::Refrigerated),
            _ => None,
        }
    }

    /// Wire code for this class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ambient => "AM",
            Self::Refrigerated => "RE",
        }
    }
}

/// A unit of cargo moved from one source to one destination.
///
/// `source` and `destination` are location indices into the owning
/// [`Problem`](super::Problem).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Container, Temperature};
///
/// let c = Container::new("C01", 0, 2, 3, Temperature::Ambient);
/// assert_eq!(c.size(), 3);
/// assert_eq!(c.destination(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    source: usize,
    destination: usize,
    size: u32,
    temperature: Temperature,
}

impl Container {
    /// Creates a new container.
    pub fn new(
        id: impl Into<String>,
        source: usize,
        destination: usize,
        size: u32,
        temperature: Temperature,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            destination,
            size,
            temperature,
        }
    }

    /// Container ID as given in the request.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source location index.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Destination location index.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Size in capacity units.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Temperature class.
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_codes() {
        for t in [Temperature::Ambient, Temperature::Refrigerated] {
            assert_eq!(Temperature::from_code(t.code()), Some(t));
        }
        assert!(Temperature::from_code("am").is_none());
    }

    #[test]
    fn test_temperature_serde() {
        let json = serde_json::to_string(&Temperature::Refrigerated).expect("serialize");
        assert_eq!(json, "\"RE\"");
        let t: Temperature = serde_json::from_str("\"AM\"").expect("deserialize");
        assert_eq!(t, Temperature::Ambient);
    }
}
