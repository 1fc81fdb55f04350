pub fn get_user_agent() -> String {
    format!("water-monitor/{}", env!("CARGO_PKG_VERSION"))
}
