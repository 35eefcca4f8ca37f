//! Registered farmers and buyers.

use crate::error::{StoreError, StoreResult};
use agromarket_model::{Order, User};
use agromarket_types::{ProductId, UserId};
use tracing::info;

/// In-memory registry of marketplace users. Emails are unique,
/// compared without regard to ASCII case.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, user: User) -> StoreResult<UserId> {
        if self.find_by_email(user.email()).is_some() {
            return Err(StoreError::DuplicateEmail(user.email().to_string()));
        }
        let id = user.id();
        info!(user_id = %id, role = user.role.as_str(), "User registered");
        self.users.push(user);
        Ok(id)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email().eq_ignore_ascii_case(email))
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Links a product to the farmer who offers it.
    pub fn publish_product(&mut self, farmer: UserId, product: ProductId) -> StoreResult<()> {
        self.user_mut(farmer)?.publish_product(product)?;
        info!(user_id = %farmer, product_id = %product, "Product published");
        Ok(())
    }

    pub fn place_order(&mut self, buyer: UserId, order: Order) -> StoreResult<()> {
        let product_id = order.product_id;
        self.user_mut(buyer)?.add_order(order)?;
        info!(user_id = %buyer, product_id = %product_id, "Order placed");
        Ok(())
    }

    fn user_mut(&mut self, id: UserId) -> StoreResult<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(StoreError::UserNotFound(id))
    }
}
