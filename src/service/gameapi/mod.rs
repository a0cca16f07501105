pub mod endpoints;
pub mod riot_api_client;
