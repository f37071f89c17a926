mod brands_tab;
mod categories_tab;
mod debts_tab;
mod page;
mod view_model;

pub use page::SettingsPage;
