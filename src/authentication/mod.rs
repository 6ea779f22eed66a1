pub mod authentication_provider;
pub mod authorization_injector;
pub mod static_token_provider;
