//! The form's in-progress candidate for a [`FarmContext`].

use super::model::{Climate, FarmContext, LandSizeClass, Region, Season, SoilType, option_names};
use crate::error::{KrishiError, Result};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The five fields of the farming form, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    Region,
    LandSize,
    SoilType,
    Climate,
    Season,
}

impl FormField {
    pub fn all() -> impl Iterator<Item = FormField> {
        Self::iter()
    }

    /// Translation key of the field's prompt.
    pub fn prompt_key(&self) -> &'static str {
        match self {
            Self::Region => "selectRegion",
            Self::LandSize => "selectLandSize",
            Self::SoilType => "selectSoilType",
            Self::Climate => "selectClimate",
            Self::Season => "selectSeason",
        }
    }

    /// Card heading of the field.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::LandSize => "Land Area",
            Self::SoilType => "Soil Type",
            Self::Climate => "Climate Condition",
            Self::Season => "Growing Season",
        }
    }

    /// Accepted values for this field, in display order.
    pub fn options(&self) -> Vec<String> {
        match self {
            Self::Region => option_names::<Region>(),
            Self::LandSize => option_names::<LandSizeClass>(),
            Self::SoilType => option_names::<SoilType>(),
            Self::Climate => option_names::<Climate>(),
            Self::Season => option_names::<Season>(),
        }
    }

    /// Accepted values paired with their translation keys, for pickers.
    pub fn choices(&self) -> Vec<FieldChoice> {
        match self {
            Self::Region => Region::iter()
                .map(|v| FieldChoice::labelled(v.to_string(), v.translation_key()))
                .collect(),
            Self::LandSize => LandSizeClass::iter()
                .map(|v| FieldChoice::labelled(v.to_string(), v.label_key()))
                .collect(),
            Self::Season => Season::iter()
                .map(|v| FieldChoice::labelled(v.to_string(), v.label_key()))
                .collect(),
            Self::SoilType | Self::Climate => self
                .options()
                .into_iter()
                .map(|value| FieldChoice {
                    value,
                    label_key: None,
                })
                .collect(),
        }
    }

    fn name(&self) -> &'static str {
        self.into()
    }
}

/// One entry of a field's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChoice {
    /// The value accepted by [`FarmContextDraft::set`].
    pub value: String,
    /// Translation key of a localized label, when one exists.
    pub label_key: Option<String>,
}

impl FieldChoice {
    fn labelled(value: String, key: impl Into<String>) -> Self {
        Self {
            value,
            label_key: Some(key.into()),
        }
    }
}

/// Five optional fields; `None` is an empty field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmContextDraft {
    pub region: Option<Region>,
    pub land_size: Option<LandSizeClass>,
    pub soil_type: Option<SoilType>,
    pub climate: Option<Climate>,
    pub season: Option<Season>,
}

fn parse_option<T: FromStr>(field: FormField, raw: &str) -> Result<T> {
    T::from_str(raw).map_err(|_| KrishiError::invalid_option(field.name(), raw))
}

impl FarmContextDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a draft from the five raw strings of a form submission.
    ///
    /// Empty strings leave the corresponding field empty.
    pub fn from_raw(
        region: &str,
        land_size: &str,
        soil_type: &str,
        climate: &str,
        season: &str,
    ) -> Result<Self> {
        let mut draft = Self::new();
        draft.set(FormField::Region, region)?;
        draft.set(FormField::LandSize, land_size)?;
        draft.set(FormField::SoilType, soil_type)?;
        draft.set(FormField::Climate, climate)?;
        draft.set(FormField::Season, season)?;
        Ok(draft)
    }

    /// Sets one field from its raw string value.
    ///
    /// A blank value clears the field. A value outside the field's option list
    /// is rejected and the field keeps its previous value.
    pub fn set(&mut self, field: FormField, raw: &str) -> Result<()> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.clear(field);
            return Ok(());
        }

        match field {
            FormField::Region => self.region = Some(parse_option(field, raw)?),
            FormField::LandSize => self.land_size = Some(parse_option(field, raw)?),
            FormField::SoilType => self.soil_type = Some(parse_option(field, raw)?),
            FormField::Climate => self.climate = Some(parse_option(field, raw)?),
            FormField::Season => self.season = Some(parse_option(field, raw)?),
        }
        Ok(())
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Region => self.region = None,
            FormField::LandSize => self.land_size = None,
            FormField::SoilType => self.soil_type = None,
            FormField::Climate => self.climate = None,
            FormField::Season => self.season = None,
        }
    }

    /// Current value of a field as its display string.
    pub fn get(&self, field: FormField) -> Option<String> {
        match field {
            FormField::Region => self.region.map(|v| v.to_string()),
            FormField::LandSize => self.land_size.map(|v| v.to_string()),
            FormField::SoilType => self.soil_type.map(|v| v.to_string()),
            FormField::Climate => self.climate.map(|v| v.to_string()),
            FormField::Season => self.season.map(|v| v.to_string()),
        }
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::all()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// Builds the immutable context, only when every field is set.
    pub fn complete(&self) -> Option<FarmContext> {
        Some(FarmContext::new(
            self.region?,
            self.land_size?,
            self.soil_type?,
            self.climate?,
            self.season?,
        ))
    }
}

impl From<&FarmContext> for FarmContextDraft {
    fn from(context: &FarmContext) -> Self {
        Self {
            region: Some(context.region()),
            land_size: Some(context.land_size()),
            soil_type: Some(context.soil_type()),
            climate: Some(context.climate()),
            season: Some(context.season()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> FarmContextDraft {
        FarmContextDraft::from_raw("Punjab", "small", "Alluvial Soil", "Semi-Arid", "rabi").unwrap()
    }

    #[test]
    fn test_complete_draft_builds_context() {
        let context = full_draft().complete().expect("all fields set");
        assert_eq!(context.region(), Region::Punjab);
        assert_eq!(context.land_size(), LandSizeClass::Small);
        assert_eq!(context.soil_type(), SoilType::Alluvial);
        assert_eq!(context.climate(), Climate::SemiArid);
        assert_eq!(context.season(), Season::Rabi);
    }

    #[test]
    fn test_each_missing_field_blocks_completion() {
        for field in FormField::all() {
            let mut draft = full_draft();
            draft.set(field, "").unwrap();

            assert!(!draft.is_complete(), "{field} cleared but draft complete");
            assert_eq!(draft.missing_fields(), vec![field]);
        }
    }

    #[test]
    fn test_invalid_value_keeps_previous() {
        let mut draft = full_draft();
        let err = draft.set(FormField::Season, "monsoon").unwrap_err();

        assert!(err.is_invalid_option());
        assert_eq!(draft.season, Some(Season::Rabi));
    }

    #[test]
    fn test_empty_draft_lists_all_fields_missing() {
        let draft = FarmContextDraft::new();
        assert_eq!(draft.missing_fields().len(), 5);
        assert!(draft.complete().is_none());
    }

    #[test]
    fn test_options_per_field() {
        assert_eq!(FormField::Region.options().len(), 28);
        assert_eq!(FormField::LandSize.options().len(), 5);
        assert_eq!(FormField::SoilType.options().len(), 8);
        assert_eq!(FormField::Climate.options().len(), 8);
        assert_eq!(FormField::Season.options().len(), 4);
    }

    #[test]
    fn test_choices_are_settable() {
        for field in FormField::all() {
            let choices = field.choices();
            assert_eq!(choices.len(), field.options().len());
            for choice in choices {
                let mut draft = FarmContextDraft::new();
                draft.set(field, &choice.value).unwrap();
                assert_eq!(draft.get(field), Some(choice.value));
            }
        }

        let seasons = FormField::Season.choices();
        assert_eq!(seasons[3].value, "year-round");
        assert_eq!(seasons[3].label_key.as_deref(), Some("yearRound"));
        assert_eq!(FormField::SoilType.choices()[0].label_key, None);
    }
}
