use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IsAuthResponse {
    pub authenticated: bool,
}
