pub mod authenticator;
pub mod middleware;
pub mod routes;
