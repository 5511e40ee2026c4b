//! Bearer-token middleware. Validates the access token and stores the
//! resulting auth context as a request extension for the `Auth` extractor.

use axum::{
	extract::{Request, State},
	http::header::AUTHORIZATION,
	middleware::Next,
	response::Response,
};

use crate::extract::Auth;
use crate::prelude::*;

fn bearer_token(req: &Request) -> Option<&str> {
	req.headers()
		.get(AUTHORIZATION)?
		.to_str()
		.ok()?
		.strip_prefix("Bearer ")
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request,
	next: Next,
) -> SnResult<Response> {
	let token = bearer_token(&req).ok_or(Error::Unauthenticated)?;
	let ctx = app.auth_adapter.validate_access_token(token).await?;

	req.extensions_mut().insert(Auth(ctx));
	Ok(next.run(req).await)
}

// vim: ts=4
