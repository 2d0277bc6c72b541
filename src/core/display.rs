/// Shown when a student has no usable name on file
pub const ANONYMOUS_NAME: &str = "Student Guide";

/// Mask a full name down to first name and last initial
///
/// "Priya Sharma" becomes "Priya S.", a single name is kept as is.
pub fn mask_name(name: Option<&str>) -> String {
    let mut parts = name.unwrap_or("").split_whitespace();

    let Some(first) = parts.next() else {
        return ANONYMOUS_NAME.to_string();
    };

    match parts.last().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{} {}.", first, initial.to_uppercase()),
        None => first.to_string(),
    }
}
