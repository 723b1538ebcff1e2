use crate::{auth, handlers, AppState};
use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Index,
    ListUsers,
    CreateUser,
    GetUser,
    Protected,
}

/// Route metadata. Whether a route needs auth is recorded here; the
/// `require_login` guard is what enforces it.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub handler: &'static str,
    pub endpoint: Endpoint,
    pub requires_auth: bool,
}

pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        method: "GET",
        path: "/",
        handler: "index",
        endpoint: Endpoint::Index,
        requires_auth: false,
    },
    RouteInfo {
        method: "GET",
        path: "/users",
        handler: "list_users",
        endpoint: Endpoint::ListUsers,
        requires_auth: false,
    },
    RouteInfo {
        method: "POST",
        path: "/users",
        handler: "create_user",
        endpoint: Endpoint::CreateUser,
        requires_auth: false,
    },
    RouteInfo {
        method: "GET",
        path: "/users/{id}",
        handler: "get_user",
        endpoint: Endpoint::GetUser,
        requires_auth: false,
    },
    RouteInfo {
        method: "GET",
        path: "/protected",
        handler: "protected",
        endpoint: Endpoint::Protected,
        requires_auth: true,
    },
];

fn method_router(endpoint: Endpoint) -> MethodRouter<AppState> {
    match endpoint {
        Endpoint::Index => get(handlers::index),
        Endpoint::ListUsers => get(handlers::list_users),
        Endpoint::CreateUser => post(handlers::create_user),
        Endpoint::GetUser => get(handlers::get_user),
        Endpoint::Protected => get(handlers::protected),
    }
}

/// Build the application router from `ROUTES`.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new();

    for route in ROUTES {
        let mut service = method_router(route.endpoint);
        if route.requires_auth {
            service = service.route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_login,
            ));
        }
        router = router.route(route.path, service);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

pub fn log_registered_routes() {
    tracing::info!("Registered routes:");
    for route in ROUTES {
        tracing::info!(
            "{}: {} {}{}",
            route.handler,
            route.method,
            route.path,
            if route.requires_auth { " [requires_auth]" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_table_has_no_duplicates() {
        let keys: HashSet<(&str, &str)> = ROUTES.iter().map(|r| (r.method, r.path)).collect();
        assert_eq!(keys.len(), ROUTES.len());
    }

    #[test]
    fn test_only_protected_requires_auth() {
        let guarded: Vec<&str> = ROUTES
            .iter()
            .filter(|r| r.requires_auth)
            .map(|r| r.path)
            .collect();
        assert_eq!(guarded, vec!["/protected"]);
    }
}
