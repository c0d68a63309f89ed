use crate::{
    constants::{MOON_SEMI_DIAMETER_DEG, SUN_SEMI_DIAMETER_DEG},
    prelude::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Navigational stars we know how to name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Star {
    Sirius,
    Canopus,
    Arcturus,
    Rigel,
    Procyon,
    Vega,
    Capella,
    RigilKentaurus,
    Altair,
    Acrux,
    Aldebaran,
    Spica,
    Antares,
    Pollux,
    Deneb,
    Betelgeuse,
    Bellatrix,
    Alpheratz,
    Fomalhaut,
    Polaris,
}

impl Star {
    pub const ALL: [Self; 20] = [
        Self::Sirius,
        Self::Canopus,
        Self::Arcturus,
        Self::Rigel,
        Self::Procyon,
        Self::Vega,
        Self::Capella,
        Self::RigilKentaurus,
        Self::Altair,
        Self::Acrux,
        Self::Aldebaran,
        Self::Spica,
        Self::Antares,
        Self::Pollux,
        Self::Deneb,
        Self::Betelgeuse,
        Self::Bellatrix,
        Self::Alpheratz,
        Self::Fomalhaut,
        Self::Polaris,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Sirius => "sirius",
            Self::Canopus => "canopus",
            Self::Arcturus => "arcturus",
            Self::Rigel => "rigel",
            Self::Procyon => "procyon",
            Self::Vega => "vega",
            Self::Capella => "capella",
            Self::RigilKentaurus => "rigil_kentaurus",
            Self::Altair => "altair",
            Self::Acrux => "acrux",
            Self::Aldebaran => "aldebaran",
            Self::Spica => "spica",
            Self::Antares => "antares",
            Self::Pollux => "pollux",
            Self::Deneb => "deneb",
            Self::Betelgeuse => "betelgeuse",
            Self::Bellatrix => "bellatrix",
            Self::Alpheratz => "alpheratz",
            Self::Fomalhaut => "fomalhaut",
            Self::Polaris => "polaris",
        }
    }
}

/// Celestial [Body] that may be observed with a sextant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Star(Star),
}

impl Body {
    /// Semi-diameter (degrees) used by the limb correction.
    /// Only the Sun and the Moon have an appreciable disc;
    /// planets and stars are observed as points.
    pub fn semi_diameter_deg(&self) -> f64 {
        match self {
            Self::Sun => SUN_SEMI_DIAMETER_DEG,
            Self::Moon => MOON_SEMI_DIAMETER_DEG,
            _ => 0.0,
        }
    }

    /// True for bodies whose upper or lower limb may be observed.
    pub fn has_limb(&self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sun => write!(f, "sun"),
            Self::Moon => write!(f, "moon"),
            Self::Mercury => write!(f, "mercury"),
            Self::Venus => write!(f, "venus"),
            Self::Mars => write!(f, "mars"),
            Self::Jupiter => write!(f, "jupiter"),
            Self::Saturn => write!(f, "saturn"),
            Self::Star(star) => write!(f, "{}", star.name()),
        }
    }
}

impl std::str::FromStr for Body {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "sun" => Ok(Self::Sun),
            "moon" => Ok(Self::Moon),
            "mercury" => Ok(Self::Mercury),
            "venus" => Ok(Self::Venus),
            "mars" => Ok(Self::Mars),
            "jupiter" => Ok(Self::Jupiter),
            "saturn" => Ok(Self::Saturn),
            "rigel_kentaurus_a" | "rigil kentaurus" => Ok(Self::Star(Star::RigilKentaurus)),
            _ => Star::ALL
                .iter()
                .find(|star| star.name() == name)
                .map(|star| Self::Star(*star))
                .ok_or(Error::UnknownBody(s.to_string())),
        }
    }
}
