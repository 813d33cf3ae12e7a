//! Normalized status and payment vocabularies.
//!
//! The REST payload carries both values as free-form strings. They are
//! normalized here once so the rest of the crate can pattern match, while
//! unrecognized values are kept verbatim instead of being rejected.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Parsing is case-insensitive. Anything outside the known vocabulary becomes
/// [`OrderStatus::Unknown`], which renders with no step marked current.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Packed,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Packed => "packed",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "packed" => Self::Packed,
            "shipped" => Self::Shipped,
            "out_for_delivery" => Self::OutForDelivery,
            "delivered" => Self::Delivered,
            "cancelled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the order is paid for. Only cash-on-delivery changes the rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    CashOnDelivery,
    /// Any online method, kept as sent by the backend (`"card"`, `"upi"`, ...).
    Prepaid(String),
}

impl PaymentMethod {
    pub fn is_cash_on_delivery(&self) -> bool {
        matches!(self, Self::CashOnDelivery)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Prepaid(String::new())
    }
}

impl From<&str> for PaymentMethod {
    fn from(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("cod") {
            Self::CashOnDelivery
        } else {
            Self::Prepaid(raw.to_string())
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::CashOnDelivery => "cod".to_string(),
            PaymentMethod::Prepaid(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_ignores_case() {
        assert_eq!(OrderStatus::from("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from("Out_For_Delivery"), OrderStatus::OutForDelivery);
        assert!(OrderStatus::from("Cancelled").is_cancelled());
    }

    #[test]
    fn unknown_status_keeps_raw_value() {
        let status = OrderStatus::from("on-hold");
        assert_eq!(status, OrderStatus::Unknown("on-hold".to_string()));
        assert_eq!(status.as_str(), "on-hold");
    }

    #[test]
    fn only_cod_is_cash_on_delivery() {
        assert!(PaymentMethod::from("COD").is_cash_on_delivery());
        assert!(PaymentMethod::from("cod").is_cash_on_delivery());
        assert!(!PaymentMethod::from("card").is_cash_on_delivery());
        assert!(!PaymentMethod::from("cash").is_cash_on_delivery());
        assert!(!PaymentMethod::from("").is_cash_on_delivery());
    }
}
