use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrative family the detected document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFamily {
    Urssaf,
    Impots,
    Identite,
    Energie,
    Entreprise,
    Unknown,
}

impl DocumentFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFamily::Urssaf => "urssaf",
            DocumentFamily::Impots => "impots",
            DocumentFamily::Identite => "identite",
            DocumentFamily::Energie => "energie",
            DocumentFamily::Entreprise => "entreprise",
            DocumentFamily::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urssaf" => Ok(DocumentFamily::Urssaf),
            "impots" => Ok(DocumentFamily::Impots),
            "identite" => Ok(DocumentFamily::Identite),
            "energie" => Ok(DocumentFamily::Energie),
            "entreprise" => Ok(DocumentFamily::Entreprise),
            "unknown" => Ok(DocumentFamily::Unknown),
            other => Err(format!("unknown document family: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spellings() {
        for family in [
            DocumentFamily::Urssaf,
            DocumentFamily::Impots,
            DocumentFamily::Identite,
            DocumentFamily::Energie,
            DocumentFamily::Entreprise,
            DocumentFamily::Unknown,
        ] {
            assert_eq!(family.as_str().parse::<DocumentFamily>().unwrap(), family);
        }
        assert!("sante".parse::<DocumentFamily>().is_err());
    }
}
