//! Patient data types for obesity risk prediction.
//!
//! Based on the lifestyle and biometric survey features the obesity model
//! was trained on.

use serde::{Deserialize, Serialize};

use super::features::FeatureVector;

/// Errors raised while validating raw patient input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A category answer is not in its closed lookup table.
    #[error("{field}: unknown category {value:?}")]
    InvalidCategory {
        /// Field the answer belongs to
        field: &'static str,
        /// The offending value, verbatim
        value: String,
    },

    /// A numeric field is outside its declared bounds.
    #[error("{field}: {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Field the value belongs to
        field: &'static str,
        /// The offending value
        value: f64,
        /// Lower bound, inclusive
        min: f64,
        /// Upper bound, inclusive
        max: f64,
    },
}

/// Patient gender as surveyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }

    fn from_answer(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// A yes/no survey answer (family history, FAVC, SMOKE, SCC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }

    fn from_answer(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }
}

/// A graded frequency answer (CAEC, CALC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    No,
    Sometimes,
    Frequently,
    Always,
}

impl Frequency {
    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Sometimes => 1.0,
            Self::Frequently => 2.0,
            Self::Always => 3.0,
        }
    }

    fn from_answer(value: &str) -> Option<Self> {
        match value {
            "No" => Some(Self::No),
            "Sometimes" => Some(Self::Sometimes),
            "Frequently" => Some(Self::Frequently),
            "Always" => Some(Self::Always),
            _ => None,
        }
    }
}

/// Main transportation mode (MTRANS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    Walking,
    Bike,
    Motorbike,
    #[serde(rename = "Public Transport")]
    PublicTransport,
    Automobile,
}

impl Transport {
    /// Integer code used by the trained model.
    #[must_use]
    pub const fn code(self) -> f64 {
        match self {
            Self::Walking => 0.0,
            Self::Bike => 1.0,
            Self::Motorbike => 2.0,
            Self::PublicTransport => 3.0,
            Self::Automobile => 4.0,
        }
    }

    fn from_answer(value: &str) -> Option<Self> {
        match value {
            "Walking" => Some(Self::Walking),
            "Bike" => Some(Self::Bike),
            "Motorbike" => Some(Self::Motorbike),
            "Public Transport" => Some(Self::PublicTransport),
            "Automobile" => Some(Self::Automobile),
            _ => None,
        }
    }
}

fn category<T>(
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    parse(value).ok_or_else(|| ValidationError::InvalidCategory {
        field,
        value: value.to_string(),
    })
}

fn bounded(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Raw survey answers as entered in the intake form.
///
/// Category answers are kept verbatim; [`parse`](Self::parse) resolves
/// them against the closed category tables. This is the only place raw
/// strings enter the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub gender: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub family_history: String,
    pub high_calorie_food: String,
    pub vegetable_frequency: f64,
    pub main_meals: u32,
    pub eating_between_meals: String,
    pub smoker: String,
    pub water_intake: f64,
    pub tracks_calories: String,
    pub physical_activity: f64,
    pub tech_use_time: f64,
    pub alcohol_consumption: String,
    pub transport_mode: String,
}

impl IntakeRecord {
    /// Resolve the raw category answers against their closed tables.
    ///
    /// Numeric bounds are checked later, at encoding time.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidCategory` naming the field and the
    /// offending value for any answer outside its table.
    pub fn parse(&self) -> Result<PatientAttributes, ValidationError> {
        Ok(PatientAttributes {
            gender: category("gender", &self.gender, Gender::from_answer)?,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            family_history: category("family_history", &self.family_history, Answer::from_answer)?,
            high_calorie_food: category(
                "high_calorie_food",
                &self.high_calorie_food,
                Answer::from_answer,
            )?,
            vegetable_frequency: self.vegetable_frequency,
            main_meals: self.main_meals,
            eating_between_meals: category(
                "eating_between_meals",
                &self.eating_between_meals,
                Frequency::from_answer,
            )?,
            smoker: category("smoker", &self.smoker, Answer::from_answer)?,
            water_intake: self.water_intake,
            tracks_calories: category(
                "tracks_calories",
                &self.tracks_calories,
                Answer::from_answer,
            )?,
            physical_activity: self.physical_activity,
            tech_use_time: self.tech_use_time,
            alcohol_consumption: category(
                "alcohol_consumption",
                &self.alcohol_consumption,
                Frequency::from_answer,
            )?,
            transport_mode: category("transport_mode", &self.transport_mode, Transport::from_answer)?,
        })
    }
}

/// Typed patient attributes for obesity risk prediction.
///
/// 16 features matching the trained model, in the model's training order:
/// Gender, Age, Height, Weight, Family History, FAVC, FCVC, NCP, CAEC,
/// SMOKE, CH2O, SCC, FAF, TUE, CALC, MTRANS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientAttributes {
    /// Patient gender
    pub gender: Gender,

    /// Age in years (10-100)
    pub age: u32,

    /// Height in centimeters (100-220)
    pub height_cm: f64,

    /// Weight in kilograms (30-200)
    pub weight_kg: f64,

    /// Family history of obesity
    pub family_history: Answer,

    /// Frequent high-calorie food consumption (FAVC)
    pub high_calorie_food: Answer,

    /// Vegetable consumption frequency (FCVC, 0-5)
    pub vegetable_frequency: f64,

    /// Number of main meals per day (NCP, 1-6)
    pub main_meals: u32,

    /// Eating between meals (CAEC)
    pub eating_between_meals: Frequency,

    /// Smoker (SMOKE)
    pub smoker: Answer,

    /// Daily water intake (CH2O, 0-5)
    pub water_intake: f64,

    /// Calorie tracking (SCC)
    pub tracks_calories: Answer,

    /// Physical activity frequency (FAF, 0-7)
    pub physical_activity: f64,

    /// Daily technology use time (TUE, 0-10)
    pub tech_use_time: f64,

    /// Alcohol consumption (CALC)
    pub alcohol_consumption: Frequency,

    /// Main transportation mode (MTRANS)
    pub transport_mode: Transport,
}

impl PatientAttributes {
    /// Validate that all numeric features are within their declared bounds.
    ///
    /// # Errors
    /// Returns `ValidationError::OutOfRange` for the first field outside
    /// its bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        bounded("age", f64::from(self.age), 10.0, 100.0)?;
        bounded("height_cm", self.height_cm, 100.0, 220.0)?;
        bounded("weight_kg", self.weight_kg, 30.0, 200.0)?;
        bounded("vegetable_frequency", self.vegetable_frequency, 0.0, 5.0)?;
        bounded("main_meals", f64::from(self.main_meals), 1.0, 6.0)?;
        bounded("water_intake", self.water_intake, 0.0, 5.0)?;
        bounded("physical_activity", self.physical_activity, 0.0, 7.0)?;
        bounded("tech_use_time", self.tech_use_time, 0.0, 10.0)?;
        Ok(())
    }

    /// Encode the attributes into the fixed-order feature vector.
    ///
    /// Fields are emitted positionally, one expression per feature, so the
    /// vector order is fixed at compile time and always matches the order
    /// the classifier was trained on. Category fields are replaced by
    /// their closed table codes. Pure: identical input yields an identical
    /// vector, every time.
    ///
    /// # Errors
    /// Returns `ValidationError::OutOfRange` if a numeric field is outside
    /// its declared bounds.
    pub fn encode(&self) -> Result<FeatureVector, ValidationError> {
        self.validate()?;

        Ok(FeatureVector::new([
            self.gender.code(),
            f64::from(self.age),
            self.height_cm,
            self.weight_kg,
            self.family_history.code(),
            self.high_calorie_food.code(),
            self.vegetable_frequency,
            f64::from(self.main_meals),
            self.eating_between_meals.code(),
            self.smoker.code(),
            self.water_intake,
            self.tracks_calories.code(),
            self.physical_activity,
            self.tech_use_time,
            self.alcohol_consumption.code(),
            self.transport_mode.code(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FEATURE_COUNT;

    fn sample_attributes() -> PatientAttributes {
        PatientAttributes {
            gender: Gender::Female,
            age: 30,
            height_cm: 170.0,
            weight_kg: 70.0,
            family_history: Answer::Yes,
            high_calorie_food: Answer::Yes,
            vegetable_frequency: 2.5,
            main_meals: 3,
            eating_between_meals: Frequency::Sometimes,
            smoker: Answer::No,
            water_intake: 2.5,
            tracks_calories: Answer::No,
            physical_activity: 3.0,
            tech_use_time: 2.0,
            alcohol_consumption: Frequency::Sometimes,
            transport_mode: Transport::Automobile,
        }
    }

    fn sample_intake() -> IntakeRecord {
        IntakeRecord {
            gender: "Female".to_string(),
            age: 30,
            height_cm: 170.0,
            weight_kg: 70.0,
            family_history: "Yes".to_string(),
            high_calorie_food: "Yes".to_string(),
            vegetable_frequency: 2.5,
            main_meals: 3,
            eating_between_meals: "Sometimes".to_string(),
            smoker: "No".to_string(),
            water_intake: 2.5,
            tracks_calories: "No".to_string(),
            physical_activity: 3.0,
            tech_use_time: 2.0,
            alcohol_consumption: "Sometimes".to_string(),
            transport_mode: "Automobile".to_string(),
        }
    }

    #[test]
    fn test_encode_reference_scenario() {
        let vector = sample_attributes().encode().expect("Should encode");

        let expected = [
            1.0, 30.0, 170.0, 70.0, 1.0, 1.0, 2.5, 3.0, 1.0, 0.0, 2.5, 0.0, 3.0, 2.0, 1.0, 4.0,
        ];
        assert_eq!(vector.len(), FEATURE_COUNT);
        assert_eq!(vector.as_slice(), &expected);
    }

    #[test]
    fn test_encode_is_pure() {
        let attributes = sample_attributes();
        let first = attributes.encode().expect("Should encode");
        let second = attributes.encode().expect("Should encode");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_resolves_all_categories() {
        let attributes = sample_intake().parse().expect("Should parse");
        assert_eq!(attributes, sample_attributes());
    }

    #[test]
    fn test_parse_rejects_unknown_transport() {
        let mut intake = sample_intake();
        intake.transport_mode = "Plane".to_string();

        let err = intake.parse().expect_err("Plane is not a transport mode");
        assert_eq!(
            err,
            ValidationError::InvalidCategory {
                field: "transport_mode",
                value: "Plane".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_frequency() {
        let mut intake = sample_intake();
        intake.alcohol_consumption = "Rarely".to_string();

        let err = intake.parse().expect_err("Rarely is not in the CALC table");
        assert!(matches!(
            err,
            ValidationError::InvalidCategory {
                field: "alcohol_consumption",
                ..
            }
        ));
    }

    #[test]
    fn test_encode_rejects_out_of_range_age() {
        let mut attributes = sample_attributes();
        attributes.age = 101;

        let err = attributes.encode().expect_err("Age 101 is out of range");
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "age",
                value: 101.0,
                min: 10.0,
                max: 100.0,
            }
        );
    }

    #[test]
    fn test_encode_rejects_out_of_range_activity() {
        let mut attributes = sample_attributes();
        attributes.physical_activity = 7.5;

        assert!(matches!(
            attributes.encode(),
            Err(ValidationError::OutOfRange {
                field: "physical_activity",
                ..
            })
        ));
    }

    #[test]
    fn test_category_codes_match_training_tables() {
        assert!((Gender::Male.code() - 0.0).abs() < f64::EPSILON);
        assert!((Gender::Female.code() - 1.0).abs() < f64::EPSILON);
        assert!((Answer::Yes.code() - 1.0).abs() < f64::EPSILON);
        assert!((Answer::No.code() - 0.0).abs() < f64::EPSILON);
        assert!((Frequency::Always.code() - 3.0).abs() < f64::EPSILON);
        assert!((Transport::PublicTransport.code() - 3.0).abs() < f64::EPSILON);
        assert!((Transport::Automobile.code() - 4.0).abs() < f64::EPSILON);
    }
}
