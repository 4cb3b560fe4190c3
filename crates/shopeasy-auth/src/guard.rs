//! Route access policy.

use crate::session::SessionContext;

/// What kind of session a route demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Customer-facing pages (dashboard, products, cart).
    Customer,
    /// Admin console pages.
    Admin,
}

/// Outcome of a route access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session may view the route.
    Granted,
    /// No usable session.
    RedirectToLogin,
    /// Customer tried an admin route.
    RedirectToDashboard,
    /// Admin tried a customer route.
    RedirectToAdmin,
}

/// Decide whether a session may view a route.
///
/// Admins and customers each have their own area; landing in the wrong
/// one bounces to that session's home rather than an error page.
pub fn check_route(session: &SessionContext, route: RouteKind) -> RouteAccess {
    if !session.is_authenticated() {
        return RouteAccess::RedirectToLogin;
    }

    match route {
        RouteKind::Admin if !session.role().is_admin() => RouteAccess::RedirectToDashboard,
        RouteKind::Customer if session.role().is_admin() => RouteAccess::RedirectToAdmin,
        _ => RouteAccess::Granted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::AuthUser;
    use shopeasy_commerce::ids::UserId;

    fn customer_session() -> SessionContext {
        SessionContext::authenticated(AuthUser::customer(UserId::new(1)), "tok")
    }

    fn admin_session() -> SessionContext {
        SessionContext::authenticated(AuthUser::admin(UserId::new(2)), "tok")
    }

    #[test]
    fn test_no_session_goes_to_login() {
        let session = SessionContext::anonymous();
        assert_eq!(
            check_route(&session, RouteKind::Customer),
            RouteAccess::RedirectToLogin
        );
        assert_eq!(
            check_route(&session, RouteKind::Admin),
            RouteAccess::RedirectToLogin
        );
    }

    #[test]
    fn test_malformed_user_record_goes_to_login() {
        let session = SessionContext::from_storage(Some("tok"), Some("garbage"));
        assert_eq!(
            check_route(&session, RouteKind::Customer),
            RouteAccess::RedirectToLogin
        );
    }

    #[test]
    fn test_customer_granted_customer_routes() {
        assert_eq!(
            check_route(&customer_session(), RouteKind::Customer),
            RouteAccess::Granted
        );
    }

    #[test]
    fn test_customer_bounced_from_admin() {
        assert_eq!(
            check_route(&customer_session(), RouteKind::Admin),
            RouteAccess::RedirectToDashboard
        );
    }

    #[test]
    fn test_admin_granted_admin_routes() {
        assert_eq!(
            check_route(&admin_session(), RouteKind::Admin),
            RouteAccess::Granted
        );
    }

    #[test]
    fn test_admin_bounced_from_customer_routes() {
        assert_eq!(
            check_route(&admin_session(), RouteKind::Customer),
            RouteAccess::RedirectToAdmin
        );
    }
}
