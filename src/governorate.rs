//! Governorate codes and gender digits of the national ID.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Place of birth registration, encoded as a two-digit code.
///
/// Serializes as its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Governorate {
    #[display(fmt = "Cairo")]
    #[serde(rename = "Cairo")]
    Cairo,
    #[display(fmt = "Alexandria")]
    #[serde(rename = "Alexandria")]
    Alexandria,
    #[display(fmt = "Port Said")]
    #[serde(rename = "Port Said")]
    PortSaid,
    #[display(fmt = "Suez")]
    #[serde(rename = "Suez")]
    Suez,
    #[display(fmt = "Damietta")]
    #[serde(rename = "Damietta")]
    Damietta,
    #[display(fmt = "Dakahlia")]
    #[serde(rename = "Dakahlia")]
    Dakahlia,
    #[display(fmt = "Ash Sharqia")]
    #[serde(rename = "Ash Sharqia")]
    AshSharqia,
    #[display(fmt = "Kaliobeya")]
    #[serde(rename = "Kaliobeya")]
    Kaliobeya,
    #[display(fmt = "Kafr El - Sheikh")]
    #[serde(rename = "Kafr El - Sheikh")]
    KafrElSheikh,
    #[display(fmt = "Gharbia")]
    #[serde(rename = "Gharbia")]
    Gharbia,
    #[display(fmt = "Monoufia")]
    #[serde(rename = "Monoufia")]
    Monoufia,
    #[display(fmt = "El Beheira")]
    #[serde(rename = "El Beheira")]
    ElBeheira,
    #[display(fmt = "Ismailia")]
    #[serde(rename = "Ismailia")]
    Ismailia,
    #[display(fmt = "Giza")]
    #[serde(rename = "Giza")]
    Giza,
    #[display(fmt = "Beni Suef")]
    #[serde(rename = "Beni Suef")]
    BeniSuef,
    #[display(fmt = "Fayoum")]
    #[serde(rename = "Fayoum")]
    Fayoum,
    #[display(fmt = "El Menia")]
    #[serde(rename = "El Menia")]
    ElMenia,
    #[display(fmt = "Assiut")]
    #[serde(rename = "Assiut")]
    Assiut,
    #[display(fmt = "Sohag")]
    #[serde(rename = "Sohag")]
    Sohag,
    #[display(fmt = "Qena")]
    #[serde(rename = "Qena")]
    Qena,
    #[display(fmt = "Aswan")]
    #[serde(rename = "Aswan")]
    Aswan,
    #[display(fmt = "Luxor")]
    #[serde(rename = "Luxor")]
    Luxor,
    #[display(fmt = "Red Sea")]
    #[serde(rename = "Red Sea")]
    RedSea,
    #[display(fmt = "New Valley")]
    #[serde(rename = "New Valley")]
    NewValley,
    #[display(fmt = "Matrouh")]
    #[serde(rename = "Matrouh")]
    Matrouh,
    #[display(fmt = "North Sinai")]
    #[serde(rename = "North Sinai")]
    NorthSinai,
    #[display(fmt = "South Sinai")]
    #[serde(rename = "South Sinai")]
    SouthSinai,
    /// Born outside Egypt
    #[display(fmt = "Foreign")]
    #[serde(rename = "Foreign")]
    Foreign,
}

impl Governorate {
    /// Every governorate with its two-digit code, in code order
    pub const TABLE: [(&'static str, Self); 28] = [
        ("01", Self::Cairo),
        ("02", Self::Alexandria),
        ("03", Self::PortSaid),
        ("04", Self::Suez),
        ("11", Self::Damietta),
        ("12", Self::Dakahlia),
        ("13", Self::AshSharqia),
        ("14", Self::Kaliobeya),
        ("15", Self::KafrElSheikh),
        ("16", Self::Gharbia),
        ("17", Self::Monoufia),
        ("18", Self::ElBeheira),
        ("19", Self::Ismailia),
        ("21", Self::Giza),
        ("22", Self::BeniSuef),
        ("23", Self::Fayoum),
        ("24", Self::ElMenia),
        ("25", Self::Assiut),
        ("26", Self::Sohag),
        ("27", Self::Qena),
        ("28", Self::Aswan),
        ("29", Self::Luxor),
        ("31", Self::RedSea),
        ("32", Self::NewValley),
        ("33", Self::Matrouh),
        ("34", Self::NorthSinai),
        ("35", Self::SouthSinai),
        ("88", Self::Foreign),
    ];

    /// Looks up a two-digit code, `None` for codes outside the table
    pub fn from_code(code: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|&(_, governorate)| governorate)
    }

    /// The two-digit code of this governorate
    pub fn code(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, governorate)| *governorate == self)
            .map_or("", |&(code, _)| code)
    }
}

/// Gender encoded by the parity of the 13th digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    #[display(fmt = "MALE")]
    Male,
    #[display(fmt = "FEMALE")]
    Female,
}

impl Gender {
    /// Odd digits are male, even digits female
    pub const fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 { Self::Male } else { Self::Female }
    }
}
