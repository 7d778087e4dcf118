pub mod ban_list;
pub mod forwarding;
pub mod server;

pub use ban_list::FileBanList;
pub use forwarding::UdpExchanger;
pub use server::{BypassHandler, ForwardHandler};
