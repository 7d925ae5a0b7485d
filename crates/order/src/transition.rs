//! Order status transition rules.
//!
//! The permissive policy accepts every move, including leaving a terminal state. The
//! strict policy only accepts the forward pipeline
//! `pending -> processing -> shipped -> delivered` and cancelling a non-terminal order.

use crate::model::OrderStatus;
use shared::{config::OrderTransitionPolicy, errors::ServiceError};

const STRICT_TRANSITIONS: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::Pending, OrderStatus::Processing),
    (OrderStatus::Processing, OrderStatus::Shipped),
    (OrderStatus::Shipped, OrderStatus::Delivered),
    (OrderStatus::Pending, OrderStatus::Cancelled),
    (OrderStatus::Processing, OrderStatus::Cancelled),
    (OrderStatus::Shipped, OrderStatus::Cancelled),
];

pub fn is_allowed(policy: OrderTransitionPolicy, from: OrderStatus, to: OrderStatus) -> bool {
    match policy {
        OrderTransitionPolicy::Permissive => true,
        OrderTransitionPolicy::Strict => STRICT_TRANSITIONS.contains(&(from, to)),
    }
}

pub fn check(
    policy: OrderTransitionPolicy,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<(), ServiceError> {
    if is_allowed(policy, from, to) {
        Ok(())
    } else {
        Err(ServiceError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_allows_everything() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert!(is_allowed(OrderTransitionPolicy::Permissive, from, to));
            }
        }
    }

    #[test]
    fn strict_terminal_states_have_no_exits() {
        for from in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            for to in OrderStatus::ALL {
                assert!(!is_allowed(OrderTransitionPolicy::Strict, from, to));
            }
        }
    }

    #[test]
    fn strict_cancel_from_any_non_terminal() {
        for from in OrderStatus::ALL.into_iter().filter(|s| !s.is_terminal()) {
            assert!(is_allowed(
                OrderTransitionPolicy::Strict,
                from,
                OrderStatus::Cancelled
            ));
        }
    }

    #[test]
    fn strict_rejects_skipping_and_going_back() {
        let policy = OrderTransitionPolicy::Strict;
        assert!(!is_allowed(policy, OrderStatus::Pending, OrderStatus::Shipped));
        assert!(!is_allowed(policy, OrderStatus::Shipped, OrderStatus::Pending));
        assert!(!is_allowed(policy, OrderStatus::Pending, OrderStatus::Pending));

        let err = check(policy, OrderStatus::Delivered, OrderStatus::Pending).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTransition { .. }));
    }
}
