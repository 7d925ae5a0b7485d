use shared::{errors::ServiceError, model::Role};
use std::fmt;

/// Mutations and privileged reads the consoles perform on behalf of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ManageCart,
    Checkout,
    ViewOwnOrders,
    ManageOwnProducts,
    ViewVendorOrders,
    ViewVendorDashboard,
    ManageUsers,
    ManageVendors,
    ManageAllProducts,
    ManageOrderStatus,
    ViewPlatformDashboard,
}

impl Action {
    pub fn role(&self) -> Role {
        match self {
            Action::ManageCart | Action::Checkout | Action::ViewOwnOrders => Role::User,
            Action::ManageOwnProducts | Action::ViewVendorOrders | Action::ViewVendorDashboard => {
                Role::Vendor
            }
            Action::ManageUsers
            | Action::ManageVendors
            | Action::ManageAllProducts
            | Action::ManageOrderStatus
            | Action::ViewPlatformDashboard => Role::Admin,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Each action belongs to exactly one role.
pub fn permits(role: Role, action: Action) -> bool {
    action.role() == role
}

pub fn ensure_permitted(role: Role, action: Action) -> Result<(), ServiceError> {
    if permits(role, action) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!("{role} may not {action}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopper_actions() {
        assert!(permits(Role::User, Action::Checkout));
        assert!(permits(Role::User, Action::ManageCart));
        assert!(!permits(Role::Vendor, Action::Checkout));
        assert!(!permits(Role::Admin, Action::ManageCart));
    }

    #[test]
    fn vendor_and_admin_are_disjoint() {
        assert!(permits(Role::Vendor, Action::ManageOwnProducts));
        assert!(!permits(Role::Admin, Action::ManageOwnProducts));
        assert!(permits(Role::Admin, Action::ManageAllProducts));
        assert!(!permits(Role::Vendor, Action::ManageOrderStatus));
    }

    #[test]
    fn denial_is_forbidden() {
        let err = ensure_permitted(Role::User, Action::ManageUsers).unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
    }
}
