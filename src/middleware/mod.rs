/*
 * Responsibility
 * - Public interface of the middleware (re-exports)
 * - auth: token extraction layers, http: transport-level layers
 */
pub mod auth;
pub mod http;
