/// Name given to the record inserted by a bootstrap run when none is configured.
pub const DEFAULT_USER_NAME: &str = "Alice";
