use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{debug, instrument};

/// Owner id every submission is attributed to in this deployment.
/// The data model supports per-user attribution; swapping this resolver for
/// a real authentication layer is the only change needed.
pub const ANONYMOUS_OWNER_ID: &str = "anonymous";

const DEFAULT_DISPLAY_NAME: &str = "Anonymous";
const PLAYER_NAME_HEADER: &str = "x-player-name";

/// Identity a request's submissions and stats queries are attributed to.
/// Resolved by middleware, never taken from the request body.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub owner_id: String,
    pub display_name: String,
}

impl CallerIdentity {
    pub fn anonymous() -> Self {
        Self {
            owner_id: ANONYMOUS_OWNER_ID.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }

    fn with_display_name(display_name: &str) -> Self {
        Self {
            owner_id: ANONYMOUS_OWNER_ID.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Identity resolution middleware - attaches a CallerIdentity to every request.
/// Usage: .layer(middleware::from_fn(identity::resolve_identity))
/// Handlers then extract Extension(identity): Extension<CallerIdentity>.
#[instrument(skip(req, next))]
pub async fn resolve_identity(mut req: Request, next: Next) -> Response {
    let display_name = req
        .headers()
        .get(PLAYER_NAME_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let identity = match display_name {
        Some(name) => CallerIdentity::with_display_name(name),
        None => CallerIdentity::anonymous(),
    };

    debug!(
        owner_id = %identity.owner_id,
        display_name = %identity.display_name,
        "Resolved caller identity"
    );

    req.extensions_mut().insert(identity);
    next.run(req).await
}
