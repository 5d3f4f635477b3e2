/// Métodos del contrato
pub const GET_RECENT_PROPS_METHOD: &str = "getRecentProps";
pub const GIVE_PROPS_METHOD: &str = "giveProps";

/// Mensaje fijo cuando falla `giveProps`
pub const SUBMIT_FAILED_ALERT: &str = "Something went wrong! \
Maybe you need to sign out and back in? \
Check your browser console for more info.";

/// Valor inicial del textarea
pub const DEFAULT_PROPS_MESSAGE: &str = "For being awesome";

pub const RECEIVER_PLACEHOLDER: &str = "username.near";

pub const NEAR_DOCS_URL: &str = "https://docs.near.org";
pub const NEAR_EXAMPLES_URL: &str = "https://examples.near.org";

/// ID del contenedor raíz en index.html
pub const APP_ROOT_ID: &str = "app";
