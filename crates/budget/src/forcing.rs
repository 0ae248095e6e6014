//! Validated daily weather forcing.

use crate::error::BudgetError;

/// Daily weather forcing for the surface water budget: total precipitation
/// (mm), average air temperature (°C), and potential evapotranspiration
/// (mm), one value per day.
#[derive(Debug, Clone)]
pub struct Forcing {
    precip: Vec<f64>,
    temp_avg: Vec<f64>,
    pet: Vec<f64>,
}

impl Forcing {
    /// Validates and builds a forcing record.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`BudgetError::EmptyForcing`] | no days |
    /// | [`BudgetError::ForcingLengthMismatch`] | lengths disagree |
    /// | [`BudgetError::NonFiniteForcing`] | NaN/infinite value |
    /// | [`BudgetError::NegativeForcing`] | negative precip or PET |
    pub fn new(precip: Vec<f64>, temp_avg: Vec<f64>, pet: Vec<f64>) -> Result<Self, BudgetError> {
        if precip.is_empty() {
            return Err(BudgetError::EmptyForcing);
        }
        if precip.len() != temp_avg.len() || precip.len() != pet.len() {
            return Err(BudgetError::ForcingLengthMismatch {
                precip: precip.len(),
                temp: temp_avg.len(),
                pet: pet.len(),
            });
        }
        for (series, values) in [
            ("precipitation", &precip),
            ("temperature", &temp_avg),
            ("potential evapotranspiration", &pet),
        ] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(BudgetError::NonFiniteForcing { series, index });
            }
        }
        for (series, values) in [("precipitation", &precip), ("potential evapotranspiration", &pet)]
        {
            if let Some(index) = values.iter().position(|&v| v < 0.0) {
                return Err(BudgetError::NegativeForcing {
                    series,
                    index,
                    value: values[index],
                });
            }
        }
        Ok(Self {
            precip,
            temp_avg,
            pet,
        })
    }

    /// Returns the daily precipitation in mm.
    pub fn precip(&self) -> &[f64] {
        &self.precip
    }

    /// Returns the daily average temperature in °C.
    pub fn temp_avg(&self) -> &[f64] {
        &self.temp_avg
    }

    /// Returns the daily potential evapotranspiration in mm.
    pub fn pet(&self) -> &[f64] {
        &self.pet
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.precip.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.precip.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_forcing() {
        let f = Forcing::new(vec![1.0, 0.0], vec![5.0, -3.0], vec![2.0, 0.5]).unwrap();
        assert_eq!(f.len(), 2);
        assert_eq!(f.precip(), &[1.0, 0.0]);
        assert_eq!(f.temp_avg(), &[5.0, -3.0]);
        assert_eq!(f.pet(), &[2.0, 0.5]);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            Forcing::new(vec![], vec![], vec![]),
            Err(BudgetError::EmptyForcing)
        ));
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = Forcing::new(vec![1.0, 2.0], vec![5.0], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::ForcingLengthMismatch {
                precip: 2,
                temp: 1,
                pet: 2
            }
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let err = Forcing::new(vec![1.0], vec![f64::NAN], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::NonFiniteForcing {
                series: "temperature",
                index: 0
            }
        ));
    }

    #[test]
    fn negative_precip_rejected() {
        let err = Forcing::new(vec![-1.0], vec![5.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::NegativeForcing {
                series: "precipitation",
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn negative_temperature_allowed() {
        assert!(Forcing::new(vec![1.0], vec![-25.0], vec![0.0]).is_ok());
    }
}
