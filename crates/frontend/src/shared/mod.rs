pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod crud_state;
pub mod export;
pub mod format;
pub mod icons;
pub mod modal;
pub mod notification;
pub mod number_input;
pub mod theme;
