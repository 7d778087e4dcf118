pub mod ban_list_reload;

pub use ban_list_reload::BanListReloadJob;
