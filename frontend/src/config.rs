
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // backend started with `cargo run -p agentflow-backend`
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // served by the backend itself
}

pub const CONTACT_EMAIL: &str = "info@agentflow-integrations.com";
pub const CONTACT_ADDRESS: &str = "Uasterstigh 3, 25946 Nebel";
pub const INSTAGRAM_URL: &str = "#";
