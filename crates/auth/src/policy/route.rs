use shared::model::{Role, User};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

const PUBLIC_PATHS: &[&str] = &[HOME_PATH, LOGIN_PATH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Vendor => "/vendor",
        Role::User => "/shop",
    }
}

/// Route gate shared by every console.
///
/// Each role owns one path prefix. Anonymous visitors are sent to the login page, a
/// signed-in user outside their own prefix is sent back to their role home. Nobody is
/// ever shown a "forbidden" page.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    /// The role whose prefix covers `path`, or `None` for paths no role owns.
    pub fn owner_of(&self, path: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| under_prefix(path, home_path(*role)))
    }

    pub fn is_public(&self, path: &str) -> bool {
        PUBLIC_PATHS.contains(&normalize(path))
    }

    pub fn decide(&self, actor: Option<&User>, path: &str) -> RouteDecision {
        let public = self.is_public(path);

        match actor {
            None if public => RouteDecision::Allow,
            None => RouteDecision::Redirect(LOGIN_PATH.to_string()),
            Some(user) if public => RouteDecision::Redirect(home_path(user.role).to_string()),
            Some(user) => match self.owner_of(path) {
                Some(owner) if owner == user.role => RouteDecision::Allow,
                _ => RouteDecision::Redirect(home_path(user.role).to_string()),
            },
        }
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.split(['?', '#']).next().unwrap_or(path);
    if trimmed.len() > 1 {
        trimmed.trim_end_matches('/')
    } else {
        trimmed
    }
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize(path);
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn actor(role: Role) -> User {
        User {
            id: "1".into(),
            email: "someone@ecommerce.com".into(),
            name: "Someone".into(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn redirect(path: &str) -> RouteDecision {
        RouteDecision::Redirect(path.into())
    }

    #[test]
    fn anonymous_goes_to_login() {
        let policy = AccessPolicy::new();
        assert_eq!(policy.decide(None, "/admin"), redirect(LOGIN_PATH));
        assert_eq!(policy.decide(None, "/shop/cart"), redirect(LOGIN_PATH));
        assert_eq!(policy.decide(None, "/login"), RouteDecision::Allow);
        assert_eq!(policy.decide(None, "/"), RouteDecision::Allow);
    }

    #[test]
    fn wrong_role_goes_home() {
        let policy = AccessPolicy::new();
        let shopper = actor(Role::User);
        let vendor = actor(Role::Vendor);
        let admin = actor(Role::Admin);

        assert_eq!(policy.decide(Some(&shopper), "/admin/users"), redirect("/shop"));
        assert_eq!(policy.decide(Some(&vendor), "/shop"), redirect("/vendor"));
        assert_eq!(policy.decide(Some(&admin), "/vendor/products"), redirect("/admin"));
    }

    #[test]
    fn own_prefix_is_allowed() {
        let policy = AccessPolicy::new();
        assert_eq!(
            policy.decide(Some(&actor(Role::Vendor)), "/vendor/orders?page=2"),
            RouteDecision::Allow
        );
        assert_eq!(policy.decide(Some(&actor(Role::Admin)), "/admin/"), RouteDecision::Allow);
    }

    #[test]
    fn signed_in_user_leaves_public_pages() {
        let policy = AccessPolicy::new();
        assert_eq!(policy.decide(Some(&actor(Role::User)), "/login"), redirect("/shop"));
        assert_eq!(policy.decide(Some(&actor(Role::Admin)), "/"), redirect("/admin"));
    }

    #[test]
    fn prefix_match_respects_segments() {
        let policy = AccessPolicy::new();
        assert_eq!(policy.owner_of("/shopping"), None);
        assert_eq!(policy.owner_of("/shop/orders"), Some(Role::User));
        assert_eq!(
            policy.decide(Some(&actor(Role::User)), "/shopping"),
            redirect("/shop")
        );
    }
}
