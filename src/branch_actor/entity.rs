//! [`ActorEntity`] implementation for [`Branch`].

use super::actions::{BranchAction, BranchActionResult};
use super::error::BranchError;
use crate::framework::ActorEntity;
use crate::model::{Branch, BranchCreate, BranchId, BranchUpdate};
use async_trait::async_trait;

fn required(field: &'static str, value: &str) -> Result<(), BranchError> {
    if value.trim().is_empty() {
        Err(BranchError::MissingField(field))
    } else {
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Branch {
    type Id = BranchId;
    type Create = BranchCreate;
    type Update = BranchUpdate;
    type Action = BranchAction;
    type ActionResult = BranchActionResult;
    type Context = ();
    type Error = BranchError;

    /// New branches start with no staff and no sales.
    fn from_create_params(id: BranchId, params: BranchCreate) -> Result<Self, BranchError> {
        required("name", &params.name)?;
        required("city", &params.city)?;
        required("address", &params.address)?;
        required("phone", &params.phone)?;
        Ok(Self {
            id,
            name: params.name,
            address: params.address,
            city: params.city,
            phone: params.phone,
            manager: params.manager,
            email: params.email,
            status: params.status,
            opening_date: params.opening_date,
            total_staff: 0,
            monthly_sales: 0,
        })
    }

    /// All checks run before anything is written, so a refused edit leaves
    /// the branch unchanged.
    async fn on_update(&mut self, update: BranchUpdate, _ctx: &()) -> Result<(), BranchError> {
        for (field, value) in [
            ("name", &update.name),
            ("city", &update.city),
            ("address", &update.address),
            ("phone", &update.phone),
        ] {
            if let Some(value) = value {
                required(field, value)?;
            }
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(manager) = update.manager {
            self.manager = manager;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BranchAction,
        _ctx: &(),
    ) -> Result<BranchActionResult, BranchError> {
        match action {
            BranchAction::ToggleStatus => {
                self.status = self.status.toggled();
                Ok(BranchActionResult::Status(self.status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BranchStatus;
    use chrono::NaiveDate;

    fn params() -> BranchCreate {
        BranchCreate {
            name: "Apotek Sehat Kemang".into(),
            address: "Jl. Kemang Raya No. 456".into(),
            city: "Jakarta Selatan".into(),
            phone: "021-87654321".into(),
            manager: "dr. Siti Nurhaliza".into(),
            email: "kemang@apoteksehat.com".into(),
            status: BranchStatus::Active,
            opening_date: NaiveDate::from_ymd_opt(2023, 6, 10).unwrap(),
        }
    }

    #[test]
    fn new_branch_has_no_staff_or_sales() {
        let b = Branch::from_create_params(BranchId(1), params()).unwrap();
        assert_eq!(b.status, BranchStatus::Active);
        assert_eq!((b.total_staff, b.monthly_sales), (0, 0));
        assert_eq!(b.opening_date, NaiveDate::from_ymd_opt(2023, 6, 10).unwrap());
    }

    #[test]
    fn city_is_required_but_manager_is_not() {
        let err = Branch::from_create_params(
            BranchId(1),
            BranchCreate {
                city: " ".into(),
                ..params()
            },
        )
        .unwrap_err();
        assert_eq!(err, BranchError::MissingField("city"));

        let unmanaged = BranchCreate {
            manager: String::new(),
            email: String::new(),
            ..params()
        };
        assert!(Branch::from_create_params(BranchId(2), unmanaged).is_ok());
    }

    #[tokio::test]
    async fn refused_update_changes_nothing() {
        let mut b = Branch::from_create_params(BranchId(1), params()).unwrap();
        let before = b.clone();
        let update = BranchUpdate {
            name: Some("Apotek Sehat Kemang 2".into()),
            phone: Some("".into()),
            ..Default::default()
        };
        assert_eq!(
            b.on_update(update, &()).await,
            Err(BranchError::MissingField("phone"))
        );
        assert_eq!(b, before);
    }

    #[tokio::test]
    async fn edit_and_toggle() {
        let mut b = Branch::from_create_params(BranchId(1), params()).unwrap();
        let update = BranchUpdate {
            manager: Some("dr. Budi Hartono".into()),
            status: Some(BranchStatus::Inactive),
            ..Default::default()
        };
        b.on_update(update, &()).await.unwrap();
        assert_eq!(b.manager, "dr. Budi Hartono");
        assert_eq!(b.status, BranchStatus::Inactive);

        let result = b.handle_action(BranchAction::ToggleStatus, &()).await;
        assert_eq!(result, Ok(BranchActionResult::Status(BranchStatus::Active)));
    }
}
