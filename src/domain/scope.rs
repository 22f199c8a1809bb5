//! Admin scope resolution and the ownership guard.
//!
//! Every admin request operates under an explicit context: the
//! authenticated actor plus the resolved scope (acting-as portfolio and
//! impersonation flag). Services receive this context as an argument so
//! tests can inject arbitrary actor/scope combinations; there is no
//! ambient session state anywhere in the crate.

use uuid::Uuid;

use crate::domain::UserRole;
use crate::errors::{AppError, AppResult};

/// The authenticated actor behind a request.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    /// The portfolio this actor owns (always None for super-admins).
    pub owned_portfolio_id: Option<Uuid>,
}

impl Actor {
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}

/// The resolved "acting-as" scope for an admin request.
///
/// `portfolio_id == None` is the platform-management-only context of an
/// un-impersonated super-admin: per-portfolio reads come back empty and
/// per-portfolio writes are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminScope {
    pub portfolio_id: Option<Uuid>,
    pub is_impersonating: bool,
}

impl AdminScope {
    /// Scope of a regular user acting on their own portfolio.
    pub fn own(portfolio_id: Uuid) -> Self {
        Self {
            portfolio_id: Some(portfolio_id),
            is_impersonating: false,
        }
    }

    /// Read-only scope of a super-admin viewing a specific portfolio.
    pub fn impersonating(portfolio_id: Uuid) -> Self {
        Self {
            portfolio_id: Some(portfolio_id),
            is_impersonating: true,
        }
    }

    /// Platform-management-only scope (super-admin, no impersonation).
    pub fn platform() -> Self {
        Self {
            portfolio_id: None,
            is_impersonating: false,
        }
    }
}

/// Actor plus resolved scope, passed into every service call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Actor,
    pub scope: AdminScope,
}

impl RequestContext {
    pub fn new(actor: Actor, scope: AdminScope) -> Self {
        Self { actor, scope }
    }
}

/// Derive the effective scope for an actor.
///
/// `impersonated_portfolio` must already be validated against storage:
/// callers pass `Some(id)` only when the impersonation token is present,
/// verified, and the referenced portfolio still exists. A dangling or
/// absent token resolves to the platform scope, never to an error.
pub fn resolve_admin_scope(actor: &Actor, impersonated_portfolio: Option<Uuid>) -> AdminScope {
    if actor.is_super_admin() {
        match impersonated_portfolio {
            Some(id) => AdminScope::impersonating(id),
            None => AdminScope::platform(),
        }
    } else {
        // Regular users cannot impersonate; any token is ignored.
        match actor.owned_portfolio_id {
            Some(id) => AdminScope::own(id),
            None => AdminScope::platform(),
        }
    }
}

/// Authorize a portfolio-content mutation against its owning portfolio.
///
/// Pure check; callers perform the actual mutation afterwards. Rules:
/// - impersonation is strictly read-only, regardless of role
/// - a regular user may only write rows owned by their own portfolio
/// - a super-admin never writes portfolio content (they manage platform
///   configuration and user lifecycle through separate, role-gated paths)
pub fn assert_writable(ctx: &RequestContext, target_portfolio_id: Uuid) -> AppResult<()> {
    if ctx.scope.is_impersonating {
        return Err(AppError::Forbidden);
    }
    if ctx.actor.is_super_admin() {
        return Err(AppError::Forbidden);
    }
    if ctx.actor.owned_portfolio_id != Some(target_portfolio_id) {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// Role gate for platform-management operations (menu catalog, user
/// lifecycle, review actions, impersonation set/clear).
pub fn assert_super_admin(ctx: &RequestContext) -> AppResult<()> {
    if ctx.actor.is_super_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_actor(portfolio_id: Uuid) -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            role: UserRole::User,
            owned_portfolio_id: Some(portfolio_id),
        }
    }

    fn super_admin() -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            role: UserRole::SuperAdmin,
            owned_portfolio_id: None,
        }
    }

    #[test]
    fn regular_user_resolves_to_own_portfolio() {
        let pid = Uuid::new_v4();
        let scope = resolve_admin_scope(&user_actor(pid), None);
        assert_eq!(scope, AdminScope::own(pid));
    }

    #[test]
    fn regular_user_cannot_impersonate() {
        let pid = Uuid::new_v4();
        let other = Uuid::new_v4();
        let scope = resolve_admin_scope(&user_actor(pid), Some(other));
        assert_eq!(scope.portfolio_id, Some(pid));
        assert!(!scope.is_impersonating);
    }

    #[test]
    fn super_admin_without_impersonation_has_platform_scope() {
        let scope = resolve_admin_scope(&super_admin(), None);
        assert_eq!(scope, AdminScope::platform());
    }

    #[test]
    fn super_admin_impersonation_scopes_to_target() {
        let pid = Uuid::new_v4();
        let scope = resolve_admin_scope(&super_admin(), Some(pid));
        assert_eq!(scope, AdminScope::impersonating(pid));
    }

    #[test]
    fn owner_may_write_own_portfolio() {
        let pid = Uuid::new_v4();
        let actor = user_actor(pid);
        let ctx = RequestContext::new(actor, AdminScope::own(pid));
        assert!(assert_writable(&ctx, pid).is_ok());
    }

    #[test]
    fn owner_may_not_write_foreign_portfolio() {
        let pid = Uuid::new_v4();
        let ctx = RequestContext::new(user_actor(pid), AdminScope::own(pid));
        let err = assert_writable(&ctx, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn impersonation_is_read_only() {
        let pid = Uuid::new_v4();
        let ctx = RequestContext::new(super_admin(), AdminScope::impersonating(pid));
        let err = assert_writable(&ctx, pid).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn super_admin_never_writes_content() {
        let pid = Uuid::new_v4();
        let ctx = RequestContext::new(super_admin(), AdminScope::platform());
        let err = assert_writable(&ctx, pid).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn super_admin_gate() {
        let pid = Uuid::new_v4();
        let ctx = RequestContext::new(super_admin(), AdminScope::platform());
        assert!(assert_super_admin(&ctx).is_ok());

        let ctx = RequestContext::new(user_actor(pid), AdminScope::own(pid));
        assert!(matches!(
            assert_super_admin(&ctx).unwrap_err(),
            AppError::Forbidden
        ));
    }
}
