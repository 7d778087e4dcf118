pub mod ban_list;
pub mod upstream_exchange;

pub use ban_list::BanListStore;
pub use upstream_exchange::{UpstreamAnswer, UpstreamExchange};
