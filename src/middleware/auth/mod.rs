/*!
 * Access token gate
 *
 * Responsibility:
 * - token: pull the raw token out of the request (cookie / header) before routing
 * - router: register routes together with their "authenticate" flag
 * - access: verify the token on flagged routes and publish the identity
 *
 * Public API:
 * - AccessTokenFeature, ACCESS_TOKEN_COOKIE
 * - AuthRouter, EndpointMetadata
 * - authenticate, verify_request, Verification
 */

pub mod access;
pub mod router;
pub mod token;

pub use access::{Verification, authenticate, verify_request};
pub use router::{AuthRouter, EndpointMetadata};
pub use token::{ACCESS_TOKEN_COOKIE, AccessTokenFeature};
