/// Name used when none is given.
pub const DEFAULT_NAME: &str = "World";

/// Returns the greeting for `name`, falling back to the default when absent or empty.
pub fn message(name: Option<&str>) -> String {
    let name = name.filter(|name| !name.is_empty()).unwrap_or(DEFAULT_NAME);
    format!("Hello, {name}!")
}
