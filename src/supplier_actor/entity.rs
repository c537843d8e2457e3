//! [`ActorEntity`] implementation for [`Supplier`].

use super::actions::{SupplierAction, SupplierActionResult};
use super::error::SupplierError;
use crate::framework::ActorEntity;
use crate::model::{Supplier, SupplierCreate, SupplierId, SupplierStatus, SupplierUpdate};
use async_trait::async_trait;

fn required(field: &'static str, value: &str) -> Result<(), SupplierError> {
    if value.trim().is_empty() {
        Err(SupplierError::MissingField(field))
    } else {
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Supplier {
    type Id = SupplierId;
    type Create = SupplierCreate;
    type Update = SupplierUpdate;
    type Action = SupplierAction;
    type ActionResult = SupplierActionResult;
    type Context = ();
    type Error = SupplierError;

    /// New suppliers start active with no orders.
    fn from_create_params(id: SupplierId, params: SupplierCreate) -> Result<Self, SupplierError> {
        required("name", &params.name)?;
        required("contact_person", &params.contact_person)?;
        required("phone", &params.phone)?;
        Ok(Self {
            id,
            name: params.name,
            contact_person: params.contact_person,
            phone: params.phone,
            email: params.email,
            address: params.address,
            status: SupplierStatus::Active,
            created_at: params.created_at,
            total_orders: 0,
        })
    }

    async fn on_update(&mut self, update: SupplierUpdate, _ctx: &()) -> Result<(), SupplierError> {
        if let Some(name) = update.name {
            required("name", &name)?;
            self.name = name;
        }
        if let Some(contact_person) = update.contact_person {
            required("contact_person", &contact_person)?;
            self.contact_person = contact_person;
        }
        if let Some(phone) = update.phone {
            required("phone", &phone)?;
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SupplierAction,
        _ctx: &(),
    ) -> Result<SupplierActionResult, SupplierError> {
        match action {
            SupplierAction::ToggleStatus => {
                self.status = self.status.toggled();
                Ok(SupplierActionResult::Status(self.status))
            }
            SupplierAction::RecordOrder => {
                self.total_orders = self.total_orders.saturating_add(1);
                Ok(SupplierActionResult::Orders(self.total_orders))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params() -> SupplierCreate {
        SupplierCreate {
            name: "PT Kalbe Farma".into(),
            contact_person: "Sari Dewi".into(),
            phone: "021-4607777".into(),
            email: String::new(),
            address: String::new(),
            created_at: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        }
    }

    #[test]
    fn new_supplier_is_active_without_orders() {
        let s = Supplier::from_create_params(SupplierId(1), params()).unwrap();
        assert_eq!(s.status, SupplierStatus::Active);
        assert_eq!(s.total_orders, 0);
    }

    #[test]
    fn contact_and_phone_are_required() {
        let err = Supplier::from_create_params(
            SupplierId(1),
            SupplierCreate {
                phone: "".into(),
                ..params()
            },
        )
        .unwrap_err();
        assert_eq!(err, SupplierError::MissingField("phone"));
    }

    #[tokio::test]
    async fn blank_update_is_refused() {
        let mut s = Supplier::from_create_params(SupplierId(1), params()).unwrap();
        let update = SupplierUpdate {
            contact_person: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(
            s.on_update(update, &()).await,
            Err(SupplierError::MissingField("contact_person"))
        );
    }
}
