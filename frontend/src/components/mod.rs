mod sidebar;
mod topbar;

pub use sidebar::{Props as SidebarProps, Sidebar};
pub use topbar::{Props as TopbarProps, Topbar};
