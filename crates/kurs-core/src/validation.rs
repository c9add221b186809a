use crate::Error;

pub(crate) fn require_name(operation: &'static str, name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            operation,
            reason: "name must not be empty",
        });
    }
    Ok(())
}
