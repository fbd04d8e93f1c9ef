//! Inline style strings shared by the components.

/// Fixed left sidebar.
pub const SIDEBAR: &str = "position: fixed; top: 0; left: 0; bottom: 0; width: 16rem; padding: 2rem 1rem; background-color: #B1AFAF;";

/// Main content, offset to the right of the sidebar.
pub const CONTENT: &str = "margin-left: 18rem; margin-right: 2rem; padding: 2rem 1rem;";

pub const PILL: &str = "display: block; padding: 0.5rem 1rem; border-radius: 0.25rem; background-color: #434242; color: #FFFFFF; text-align: center; text-decoration: none;";

/// Pill for the panel currently shown.
pub const PILL_ACTIVE: &str = "display: block; padding: 0.5rem 1rem; border-radius: 0.25rem; background-color: #007BFF; color: #FFFFFF; text-align: center; text-decoration: none;";

pub const CENTRE_TEXT: &str = "text-align: center;";

pub const LINK: &str = "text-decoration: underline;";
