//! Marketplace participants.
//!
//! Every user is a [`Person`] with exactly one [`Role`]. Role-specific data
//! lives in the role variant rather than in a subtype.

use crate::error::{ModelError, ModelResult};
use crate::lenient::normalize_amount;
use agromarket_types::{ProductId, UserId};
use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

fn validate_email(email: &str) -> ModelResult<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ModelError::InvalidEmail(email.to_string()))
    }
}

/// Identity shared by every role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: UserId,
    name: String,
    email: String,
    registered_at: DateTime<Utc>,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> ModelResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            id: UserId::new(),
            name,
            email,
            registered_at: Utc::now(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Replaces the email after validating it. The old value is kept on error.
    pub fn set_email(&mut self, email: impl Into<String>) -> ModelResult<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }
}

/// A purchase recorded against a buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub product_id: ProductId,
    pub quantity: f64,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn new(product_id: ProductId, quantity: f64) -> Self {
        Self {
            product_id,
            quantity: normalize_amount(quantity),
            placed_at: Utc::now(),
        }
    }
}

/// Role-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Role {
    /// Sells products through the catalog.
    Farmer {
        farm_name: String,
        #[serde(default)]
        products_published: Vec<ProductId>,
    },
    /// Purchases products for delivery.
    Buyer {
        address: String,
        #[serde(default)]
        orders: Vec<Order>,
    },
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer { .. } => "farmer",
            Self::Buyer { .. } => "buyer",
        }
    }
}

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub person: Person,
    pub role: Role,
}

impl User {
    pub fn farmer(
        name: impl Into<String>,
        email: impl Into<String>,
        farm_name: impl Into<String>,
    ) -> ModelResult<Self> {
        Ok(Self {
            person: Person::new(name, email)?,
            role: Role::Farmer {
                farm_name: farm_name.into(),
                products_published: Vec::new(),
            },
        })
    }

    pub fn buyer(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> ModelResult<Self> {
        Ok(Self {
            person: Person::new(name, email)?,
            role: Role::Buyer {
                address: address.into(),
                orders: Vec::new(),
            },
        })
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.person.id()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Records a product as published by this farmer.
    pub fn publish_product(&mut self, product_id: ProductId) -> ModelResult<()> {
        match &mut self.role {
            Role::Farmer {
                products_published, ..
            } => {
                if !products_published.contains(&product_id) {
                    products_published.push(product_id);
                }
                Ok(())
            }
            Role::Buyer { .. } => Err(ModelError::RoleMismatch { expected: "farmer" }),
        }
    }

    /// Records an order placed by this buyer.
    pub fn add_order(&mut self, order: Order) -> ModelResult<()> {
        match &mut self.role {
            Role::Buyer { orders, .. } => {
                orders.push(order);
                Ok(())
            }
            Role::Farmer { .. } => Err(ModelError::RoleMismatch { expected: "buyer" }),
        }
    }
}
