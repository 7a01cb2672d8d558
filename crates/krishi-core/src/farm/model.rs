//! Farming context domain model.
//!
//! Every field of a [`FarmContext`] is drawn from a closed enumeration. The
//! `Display` form of each value is the string interpolated into advisor
//! replies, and `FromStr` accepts the same string case-insensitively.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Indian states offered in the region field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[strum(to_string = "Andhra Pradesh")]
    AndhraPradesh,
    #[strum(to_string = "Arunachal Pradesh")]
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    #[strum(to_string = "Himachal Pradesh")]
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    #[strum(to_string = "Madhya Pradesh")]
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    #[strum(to_string = "Tamil Nadu")]
    TamilNadu,
    Telangana,
    Tripura,
    #[strum(to_string = "Uttar Pradesh")]
    UttarPradesh,
    Uttarakhand,
    #[strum(to_string = "West Bengal")]
    WestBengal,
}

impl Region {
    /// Translation key for the localized state name (`"Tamil Nadu"` -> `"tamilNadu"`).
    pub fn translation_key(&self) -> String {
        let name = self.to_string();
        let mut key = String::with_capacity(name.len());
        for (index, word) in name.split_whitespace().enumerate() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                if index == 0 {
                    key.extend(first.to_lowercase());
                } else {
                    key.extend(first.to_uppercase());
                }
                key.push_str(chars.as_str());
            }
        }
        key
    }
}

/// Land holding classes, following the farmer categories used in Indian
/// agricultural statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum LandSizeClass {
    Small,
    MediumSmall,
    SemiMedium,
    Medium,
    Large,
}

impl LandSizeClass {
    /// Translation key for the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Small => "landSmall",
            Self::MediumSmall => "landMediumSmall",
            Self::SemiMedium => "landSemiMedium",
            Self::Medium => "landMedium",
            Self::Large => "landLarge",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Small => "Marginal farmers",
            Self::MediumSmall => "Small farmers",
            Self::SemiMedium => "Semi-medium farmers",
            Self::Medium => "Medium farmers",
            Self::Large => "Large farmers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SoilType {
    #[strum(to_string = "Alluvial Soil")]
    Alluvial,
    #[strum(to_string = "Black Cotton Soil")]
    BlackCotton,
    #[strum(to_string = "Red Soil")]
    Red,
    #[strum(to_string = "Laterite Soil")]
    Laterite,
    #[strum(to_string = "Desert Soil")]
    Desert,
    #[strum(to_string = "Mountain Soil")]
    Mountain,
    #[strum(to_string = "Saline Soil")]
    Saline,
    #[strum(to_string = "Peaty Soil")]
    Peaty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Climate {
    #[strum(to_string = "Tropical Wet")]
    TropicalWet,
    #[strum(to_string = "Tropical Dry")]
    TropicalDry,
    #[strum(to_string = "Subtropical Humid")]
    SubtropicalHumid,
    Montane,
    Arid,
    #[strum(to_string = "Semi-Arid")]
    SemiArid,
    Coastal,
    Continental,
}

/// Cropping seasons of the Indian agricultural calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Season {
    /// Monsoon crops, June to October.
    Kharif,
    /// Winter crops, November to April.
    Rabi,
    /// Summer crops, March to June.
    Zaid,
    /// Perennial crops.
    YearRound,
}

impl Season {
    /// Translation key for the option label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Kharif => "kharif",
            Self::Rabi => "rabi",
            Self::Zaid => "zaid",
            Self::YearRound => "yearRound",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Kharif => "Monsoon season crops",
            Self::Rabi => "Winter season crops",
            Self::Zaid => "Summer season crops",
            Self::YearRound => "Perennial crops",
        }
    }
}

/// The farming context captured by the form.
///
/// A `FarmContext` is built atomically from a complete
/// [`FarmContextDraft`](super::FarmContextDraft) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmContext {
    region: Region,
    land_size: LandSizeClass,
    soil_type: SoilType,
    climate: Climate,
    season: Season,
}

impl FarmContext {
    pub fn new(
        region: Region,
        land_size: LandSizeClass,
        soil_type: SoilType,
        climate: Climate,
        season: Season,
    ) -> Self {
        Self {
            region,
            land_size,
            soil_type,
            climate,
            season,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn land_size(&self) -> LandSizeClass {
        self.land_size
    }

    pub fn soil_type(&self) -> SoilType {
        self.soil_type
    }

    pub fn climate(&self) -> Climate {
        self.climate
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// The five values in form order, as shown on the farm profile summary.
    pub fn summary(&self) -> [String; 5] {
        [
            self.region.to_string(),
            self.land_size.to_string(),
            self.soil_type.to_string(),
            self.climate.to_string(),
            self.season.to_string(),
        ]
    }
}

/// Display names of every value of an enumerated field, in declaration order.
pub fn option_names<T: IntoEnumIterator + ToString>() -> Vec<String> {
    T::iter().map(|value| value.to_string()).collect()
}
