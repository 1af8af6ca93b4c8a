use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Financial,
    Health,
    Math,
    Physics,
    Chemistry,
    Construction,
    Sports,
    Ecology,
    Everyday,
    Conversions,
}

impl CategoryId {
    pub const ALL: [CategoryId; 10] = [
        Self::Financial,
        Self::Health,
        Self::Math,
        Self::Physics,
        Self::Chemistry,
        Self::Construction,
        Self::Sports,
        Self::Ecology,
        Self::Everyday,
        Self::Conversions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Health => "health",
            Self::Math => "math",
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Construction => "construction",
            Self::Sports => "sports",
            Self::Ecology => "ecology",
            Self::Everyday => "everyday",
            Self::Conversions => "conversions",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "financial" => Some(Self::Financial),
            "health" => Some(Self::Health),
            "math" => Some(Self::Math),
            "physics" => Some(Self::Physics),
            "chemistry" => Some(Self::Chemistry),
            "construction" => Some(Self::Construction),
            "sports" => Some(Self::Sports),
            "ecology" => Some(Self::Ecology),
            "everyday" => Some(Self::Everyday),
            "conversions" => Some(Self::Conversions),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A thematic grouping of calculators.
///
/// `icon_name` and `accent` are display hints only; the engine never reads
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon_name: &'static str,
    pub accent: &'static str,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_mixed_case() {
        assert_eq!(CategoryId::parse("Financial"), None);
        assert_eq!(CategoryId::parse("astrology"), None);
        assert_eq!(CategoryId::parse(""), None);
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&CategoryId::Construction).unwrap();

        assert_eq!(json, "\"construction\"");
    }
}
