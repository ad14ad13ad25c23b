//! Customer contact and payment selection types.

use serde::{Deserialize, Serialize};

/// Contact details collected at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Email for the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerInfo {
    /// Create contact details with the required fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            address: None,
        }
    }

    /// The first required field that is missing, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.phone.trim().is_empty() {
            Some("phone")
        } else {
            None
        }
    }

    /// Check that name and phone are present.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Cash on delivery.
    Cash,
    /// Card on delivery or on file.
    #[default]
    Card,
    /// Digital wallet.
    Digital,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Digital => "digital",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Digital => "Digital wallet",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "digital" => Some(PaymentMethod::Digital),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_requires_name_and_phone() {
        let complete = CustomerInfo::new("Ada", "555-0100");
        assert!(complete.is_complete());

        let mut no_phone = complete.clone();
        no_phone.phone = "  ".to_string();
        assert_eq!(no_phone.missing_field(), Some("phone"));

        let no_name = CustomerInfo::new("", "555-0100");
        assert_eq!(no_name.missing_field(), Some("name"));
    }

    #[test]
    fn test_payment_method_round_trip() {
        for method in [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Digital,
        ] {
            assert_eq!(PaymentMethod::from_str(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_str("barter"), None);
    }
}
