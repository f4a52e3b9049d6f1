use chrono::NaiveDate;
use thiserror::Error;

use xtrema_common::models::{PickupDetails, WasteType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn require(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(name);
    }
}

fn check_missing(missing: Vec<&'static str>) -> Result<(), FormError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingFields(missing))
    }
}

fn check_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail(email.to_string())),
    }
}

/// Login credentials. Only presence is checked; nothing is verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require(&mut missing, "email", &self.email);
        require(&mut missing, "password", &self.password);
        check_missing(missing)?;
        check_email(&self.email)
    }
}

/// Pickup scheduling form. Submission stays local.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickupForm {
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub landmark: String,
    pub date: String,
    pub waste_type: WasteType,
}

impl PickupForm {
    pub const FIELDS: [&'static str; 6] = ["address", "pincode", "state", "landmark", "date", "type"];

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field.to_lowercase().as_str() {
            "address" => self.address = value.to_string(),
            "pincode" => self.pincode = value.to_string(),
            "state" => self.state = value.to_string(),
            "landmark" => self.landmark = value.to_string(),
            "date" => self.date = value.to_string(),
            "type" | "waste_type" => {
                self.waste_type = value.parse::<WasteType>().map_err(|e| {
                    FormError::InvalidValue {
                        field: "type",
                        reason: e.to_string(),
                    }
                })?
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Address, pincode, state and date are required; landmark is optional.
    pub fn validate(&self) -> Result<PickupDetails, FormError> {
        let mut missing = Vec::new();
        require(&mut missing, "address", &self.address);
        require(&mut missing, "pincode", &self.pincode);
        require(&mut missing, "state", &self.state);
        require(&mut missing, "date", &self.date);
        check_missing(missing)?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.date.trim().to_string()))?;

        let landmark = self.landmark.trim();
        Ok(PickupDetails {
            address: self.address.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            state: self.state.trim().to_string(),
            landmark: (!landmark.is_empty()).then(|| landmark.to_string()),
            date,
            waste_type: self.waste_type,
        })
    }
}

/// Support contact form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub const FIELDS: [&'static str; 4] = ["name", "email", "subject", "message"];

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field.to_lowercase().as_str() {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "subject" => self.subject = value.to_string(),
            "message" => self.message = value.to_string(),
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        require(&mut missing, "name", &self.name);
        require(&mut missing, "email", &self.email);
        require(&mut missing, "subject", &self.subject);
        require(&mut missing, "message", &self.message);
        check_missing(missing)?;
        check_email(&self.email)
    }
}
