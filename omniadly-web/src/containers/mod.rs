pub mod gated;
pub mod header;
pub mod layout;
pub mod sidebar;
