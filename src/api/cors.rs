//! Cross-origin policy for the browser front-end

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, request::Parts, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsSection;
use crate::error::{Error, Result};

type AllowedOrigins = Arc<[HeaderValue]>;

/// CORS layer plus the guard that turns away preflights from other origins.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
    layer: CorsLayer,
}

impl CorsPolicy {
    /// Build the policy for the configured origins.
    ///
    /// Origins are matched exactly. Methods and headers are mirrored from the
    /// preflight request, since wildcards cannot be combined with credentials.
    /// Credentials are only granted to allowed origins.
    pub fn from_config(section: &CorsSection) -> Result<Self> {
        let origins: AllowedOrigins = parse_origins(&section.allowed_origins)?.into();

        let credentials = if section.allow_credentials {
            let allowed = origins.clone();
            AllowCredentials::predicate(move |origin: &HeaderValue, _parts: &Parts| {
                allowed.contains(origin)
            })
        } else {
            AllowCredentials::from(false)
        };

        let layer = CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(credentials);

        Ok(Self { origins, layer })
    }

    pub fn allows(&self, origin: &HeaderValue) -> bool {
        self.origins.contains(origin)
    }

    /// Wrap the router; the preflight guard runs before the CORS layer.
    pub fn apply(self, router: Router) -> Router {
        router
            .layer(self.layer)
            .layer(middleware::from_fn_with_state(
                self.origins,
                reject_foreign_preflight,
            ))
    }
}

/// Preflights from origins outside the allow list get 400 and no CORS headers.
async fn reject_foreign_preflight(
    State(origins): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let is_preflight = request.method() == Method::OPTIONS
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if is_preflight {
        if let Some(origin) = headers.get(header::ORIGIN) {
            if !origins.contains(origin) {
                tracing::debug!(origin = ?origin, "Rejecting preflight from disallowed origin");
                return (StatusCode::BAD_REQUEST, "Disallowed CORS origin").into_response();
            }
        }
    }

    next.run(request).await
}

fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
            if !scheme_ok || origin.contains('*') {
                return Err(Error::invalid_origin(origin.as_str()));
            }
            HeaderValue::from_str(origin).map_err(|_| Error::invalid_origin(origin.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(origins: &[&str]) -> CorsSection {
        CorsSection {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            allow_credentials: true,
        }
    }

    #[test]
    fn default_origin_is_accepted() {
        let policy = CorsPolicy::from_config(&CorsSection::default()).unwrap();

        assert!(policy.allows(&HeaderValue::from_static("http://localhost:3000")));
        assert!(!policy.allows(&HeaderValue::from_static("http://localhost:3001")));
    }

    #[test]
    fn wildcard_origin_is_rejected() {
        let err = CorsPolicy::from_config(&section(&["*"])).unwrap_err();
        assert!(matches!(err, Error::InvalidOrigin(ref o) if o == "*"));
    }

    #[test]
    fn origin_without_scheme_is_rejected() {
        assert!(CorsPolicy::from_config(&section(&["localhost:3000"])).is_err());
    }

    #[test]
    fn origin_with_control_characters_is_rejected() {
        assert!(CorsPolicy::from_config(&section(&["http://bad\norigin"])).is_err());
    }

    #[test]
    fn empty_origin_list_is_allowed() {
        let policy = CorsPolicy::from_config(&section(&[])).unwrap();

        assert!(!policy.allows(&HeaderValue::from_static("http://localhost:3000")));
    }
}
